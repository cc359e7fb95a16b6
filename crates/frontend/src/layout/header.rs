use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "-".to_string())
    };

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <header class="app-header">
            <div class="app-header__left">
                <button class="button button--ghost" on:click=move |_| ctx.toggle_left()>
                    {icon("menu")}
                </button>
                <span class="app-header__brand">"Merdeka Admin"</span>
            </div>
            <div class="app-header__right">
                <span class="app-header__user">{user_name}</span>
                <button class="button button--ghost" on:click=on_logout>
                    {icon("logout")}
                    " Keluar"
                </button>
            </div>
        </header>
    }
}
