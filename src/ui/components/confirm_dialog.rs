//! Confirmation dialog for clearing the list

use crate::app::AppState;
use crate::store::Confirmation;
use dioxus::prelude::*;

/// Asks before deleting every item; shown while `confirm_clear` is set
#[component]
pub fn ConfirmDialog() -> Element {
    let app_state = use_context::<AppState>();
    if !(app_state.confirm_clear)() {
        return rsx! {};
    }

    let count = app_state.store.read().len();
    let is_en = app_state.settings.read().is_en();
    let mut state_cancel = app_state;
    let mut state_confirm = app_state;

    rsx! {
        // Backdrop
        div {
            class: "backdrop",

            div {
                class: "dialog",

                h2 {
                    if is_en { "Clear the list?" } else { "Vider la liste ?" }
                }

                p {
                    if is_en {
                        "Are you sure you want to delete all {count} items?"
                    } else {
                        "Voulez-vous vraiment supprimer les {count} objets ?"
                    }
                }

                div {
                    class: "dialog-actions",

                    button {
                        onclick: move |_| state_cancel.confirm_clear.set(false),
                        if is_en { "Cancel" } else { "Annuler" }
                    }

                    button {
                        class: "danger",
                        onclick: move |_| {
                            let removed = state_confirm
                                .store
                                .write()
                                .clear_all(Confirmation::Confirmed);
                            tracing::debug!("Cleared {} item(s) from the dialog", removed);
                            state_confirm.confirm_clear.set(false);
                        },
                        if is_en { "Delete all" } else { "Tout supprimer" }
                    }
                }
            }
        }
    }
}
