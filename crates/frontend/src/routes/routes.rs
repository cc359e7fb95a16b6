use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Pick the active page up from the URL query once, on entry.
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            match ctx.active_page.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Employees => view! { <EmployeeList /> }.into_any(),
            }
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
