use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|u| format!("Selamat datang, {}!", u.name))
            .unwrap_or_else(|| "Selamat datang!".to_string())
    };

    view! {
        <div class="dashboard">
            <h1>{greeting}</h1>
            <p>"Gunakan menu di samping untuk mengelola data."</p>
            <div class="dashboard__cards">
                <button class="dashboard__card" on:click=move |_| ctx.navigate(Page::Employees)>
                    {icon("users")}
                    <span>"Data Karyawan"</span>
                </button>
            </div>
        </div>
    }
}
