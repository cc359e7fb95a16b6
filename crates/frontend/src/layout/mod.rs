pub mod global_context;
pub mod header;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
