//! Settings panel
//!
//! Every change is saved immediately; failures are logged and the in-memory
//! settings still apply for this session.

use crate::app::AppState;
use crate::storage::settings::{save_settings, AppSettings};
use crate::store::SortOrder;
use crate::types::config::StoreConfig;
use crate::ui::packing_list::sort_label;
use dioxus::prelude::*;

fn update_settings(mut app_state: AppState, change: impl FnOnce(&mut AppSettings)) {
    let mut settings = app_state.settings.write();
    change(&mut settings);
    settings.validate();
    if let Err(error) = save_settings(&settings) {
        tracing::error!("Failed to save settings: {}", error);
    }

    let policy = StoreConfig::from(&*settings).persist_policy;
    app_state.store.write().set_persist_policy(policy);
}

#[component]
pub fn SettingsPanel() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let is_en = settings.is_en();
    let dark_mode = settings.theme == "dark";
    let keep_cleared = settings.persist_cleared_list;

    rsx! {
        div {
            class: "settings",

            div {
                class: "setting-row",
                span { if is_en { "Language" } else { "Langue" } }
                div {
                    for (code, label) in [("en", "English"), ("fr", "Français")] {
                        button {
                            class: if settings.language == code { "choice selected" } else { "choice" },
                            onclick: move |_| update_settings(app_state, |s| s.language = code.to_string()),
                            "{label}"
                        }
                    }
                }
            }

            div {
                class: "setting-row",
                span { if is_en { "Dark mode" } else { "Mode sombre" } }
                button {
                    class: if dark_mode { "toggle active" } else { "toggle" },
                    onclick: move |_| update_settings(app_state, |s| {
                        s.theme = if dark_mode { "light".to_string() } else { "dark".to_string() };
                    }),
                    if dark_mode { "On" } else { "Off" }
                }
            }

            div {
                class: "setting-row",
                span { if is_en { "Default sort order" } else { "Tri par defaut" } }
                select {
                    value: "{settings.default_sort}",
                    onchange: move |evt| match evt.value().parse::<SortOrder>() {
                        Ok(order) => update_settings(app_state, |s| s.default_sort = order),
                        Err(e) => tracing::warn!("{}", e),
                    },
                    for order in SortOrder::ALL {
                        option { value: order.as_str(), {sort_label(order, is_en)} }
                    }
                }
            }

            div {
                class: "setting-row",
                span {
                    if is_en {
                        "Remember an emptied list (off: a cleared list comes back on restart)"
                    } else {
                        "Memoriser une liste videe (sinon elle revient au redemarrage)"
                    }
                }
                button {
                    class: if keep_cleared { "toggle active" } else { "toggle" },
                    onclick: move |_| update_settings(app_state, |s| s.persist_cleared_list = !keep_cleared),
                    if keep_cleared { "On" } else { "Off" }
                }
            }
        }
    }
}
