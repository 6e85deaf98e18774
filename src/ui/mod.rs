//! UI components for Packlist
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod form;
pub mod packing_list;
pub mod settings;
pub mod stats;

use crate::app::AppState;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::form::AddItemForm;
use crate::ui::packing_list::PackingList;
use crate::ui::settings::SettingsPanel;
use crate::ui::stats::Stats;
use dioxus::prelude::*;

const STYLE: &str = include_str!("style.css");

#[component]
pub fn Layout() -> Element {
    let mut app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let warning = app_state
        .store
        .read()
        .persistence_warning()
        .map(str::to_string);
    let show_settings = (app_state.show_settings)();

    rsx! {
        style { "{STYLE}" }

        div {
            class: "app theme-{settings.theme}",

            header {
                class: "logo",
                h1 { "🌴 Far Away 💼" }
                button {
                    class: "settings-toggle",
                    title: if settings.is_en() { "Settings" } else { "Parametres" },
                    onclick: move |_| app_state.show_settings.set(!show_settings),
                    "⚙"
                }
            }

            if let Some(warning) = warning {
                div {
                    class: "warning",
                    if settings.is_en() {
                        "Your list could not be saved and will be lost on exit: {warning}"
                    } else {
                        "La liste n'a pas pu etre enregistree et sera perdue a la fermeture : {warning}"
                    }
                }
            }

            if show_settings {
                SettingsPanel {}
            }

            AddItemForm {}
            PackingList {}
            Stats {}
            ConfirmDialog {}
        }
    }
}
