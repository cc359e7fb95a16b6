use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Employees,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Employees => "karyawan",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Employees => "Karyawan",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "karyawan" => Some(Page::Employees),
            _ => None,
        }
    }
}

/// App-wide UI state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from the `?page=` query parameter and keep the
    /// URL in sync afterwards, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| Page::from_key(k)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
