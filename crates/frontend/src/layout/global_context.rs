use contracts::domain::common::ResourceKind;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Page shown when the URL names none
pub const DEFAULT_PAGE: &str = "vendors";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Collection name of the page in the center area
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Pick the page from `?active=` and keep the query string in step
    /// with the active page from then on
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = active_from_query(&search).unwrap_or_else(|| DEFAULT_PAGE.to_string());
        self.open_page(&initial);

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = query_for(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
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
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        if ResourceKind::from_collection_name(key).is_none() {
            log::warn!("Unknown page '{}'", key);
            return;
        }
        log::debug!("open_page: {}", key);
        self.active.set(Some(key.to_string()));
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

/// Known page named by `?active=`, if any
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| ResourceKind::from_collection_name(key).is_some())
        .cloned()
}

/// Query string selecting `active`
pub fn query_for(active: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), active.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}
