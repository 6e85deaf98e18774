//! The packing list with its sort selector and clear button

use crate::app::AppState;
use crate::store::SortOrder;
use crate::types::item::Item;
use dioxus::prelude::*;

/// Label shown in the sort selector
pub fn sort_label(order: SortOrder, is_en: bool) -> &'static str {
    match (order, is_en) {
        (SortOrder::Insertion, true) => "Sort by input order",
        (SortOrder::Description, true) => "Sort by description",
        (SortOrder::Packed, true) => "Sort by packed status",
        (SortOrder::Insertion, false) => "Trier par ordre d'ajout",
        (SortOrder::Description, false) => "Trier par description",
        (SortOrder::Packed, false) => "Trier par statut",
    }
}

#[component]
pub fn PackingList() -> Element {
    let mut app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();
    let order = (app_state.sort_order)();

    let items: Vec<Item> = app_state
        .store
        .read()
        .sorted_view(order)
        .into_iter()
        .cloned()
        .collect();
    let is_empty = items.is_empty();

    rsx! {
        div {
            class: "list",

            ul {
                for item in items {
                    PackingItem { key: "{item.id}", item }
                }
            }

            div {
                class: "actions",

                select {
                    value: "{order}",
                    onchange: move |evt| match evt.value().parse::<SortOrder>() {
                        Ok(order) => app_state.sort_order.set(order),
                        Err(e) => tracing::warn!("{}", e),
                    },
                    for option_order in SortOrder::ALL {
                        option {
                            value: option_order.as_str(),
                            {sort_label(option_order, is_en)}
                        }
                    }
                }

                button {
                    disabled: is_empty,
                    onclick: move |_| app_state.confirm_clear.set(true),
                    if is_en { "Clear list" } else { "Vider la liste" }
                }
            }
        }
    }
}

#[component]
fn PackingItem(item: Item) -> Element {
    let app_state = use_context::<AppState>();
    let id = item.id;
    let mut store_toggle = app_state.store;
    let mut store_delete = app_state.store;
    let is_en = app_state.settings.read().is_en();

    rsx! {
        li {
            input {
                r#type: "checkbox",
                checked: item.packed,
                onchange: move |_| {
                    store_toggle.write().toggle_packed(id);
                },
            }
            span {
                style: if item.packed { "text-decoration: line-through;" } else { "" },
                "{item.quantity} {item.description}"
            }
            button {
                title: if is_en { "Remove" } else { "Retirer" },
                onclick: move |_| {
                    store_delete.write().delete_item(id);
                },
                "❌"
            }
        }
    }
}
