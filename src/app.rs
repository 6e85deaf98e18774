//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::{FileStorage, MemoryStorage, PersistenceAdapter};
use crate::store::{ListStore, SortOrder};
use crate::types::config::StoreConfig;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: Signal<ListStore>,
    pub settings: Signal<AppSettings>,
    /// Order the list is currently displayed in
    pub sort_order: Signal<SortOrder>,
    /// "Clear list" was pressed and awaits confirmation
    pub confirm_clear: Signal<bool>,
    pub show_settings: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let store = ListStore::initialize(open_storage(), StoreConfig::from(&settings));
        tracing::info!("AppState initialized");

        Self {
            store: Signal::new(store),
            sort_order: Signal::new(settings.default_sort),
            settings: Signal::new(settings),
            confirm_clear: Signal::new(false),
            show_settings: Signal::new(false),
        }
    }
}

/// File storage in the data directory, or memory if there is none
fn open_storage() -> Box<dyn PersistenceAdapter> {
    match FileStorage::open_default() {
        Ok(storage) => {
            tracing::info!("Storing packing list in {}", storage.dir().display());
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!("No data directory, the list will not survive a restart: {}", e);
            Box::new(MemoryStorage::new())
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
