use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV_ITEMS: [(Page, &str); 2] = [(Page::Dashboard, "home"), (Page::Employees, "users")];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="app-sidebar">
                <div class="app-sidebar__section">"Master"</div>
                {NAV_ITEMS
                    .into_iter()
                    .map(|(page, icon_name)| {
                        view! {
                            <button
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    ctx.active_page.get() == page
                                }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(icon_name)}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
