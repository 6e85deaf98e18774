//! Add-item form

use crate::app::AppState;
use dioxus::prelude::*;

/// Largest quantity offered by the selector
pub const MAX_FORM_QUANTITY: u32 = 20;

#[component]
pub fn AddItemForm() -> Element {
    let mut app_state = use_context::<AppState>();
    let mut description = use_signal(String::new);
    let mut quantity = use_signal(|| 1u32);
    let mut error = use_signal(|| None::<String>);
    let is_en = app_state.settings.read().is_en();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = app_state.store.write().add_item(description(), quantity());
        match result {
            Ok(_) => {
                description.set(String::new());
                quantity.set(1);
                error.set(None);
            }
            Err(e) => {
                tracing::debug!("Rejected new item: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        form {
            class: "add-form",
            onsubmit: handle_submit,

            h3 {
                if is_en { "What do you need for your trip?" } else { "De quoi avez-vous besoin pour votre voyage ?" }
            }

            select {
                value: "{quantity}",
                onchange: move |evt| match evt.value().parse::<u32>() {
                    Ok(n) => quantity.set(n),
                    Err(e) => tracing::warn!("Bad quantity {:?}: {}", evt.value(), e),
                },
                for n in 1..=MAX_FORM_QUANTITY {
                    option { key: "{n}", value: "{n}", "{n}" }
                }
            }

            input {
                placeholder: if is_en { "Item..." } else { "Objet..." },
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }

            button {
                r#type: "submit",
                if is_en { "Add" } else { "Ajouter" }
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
