//! Footer with packing progress

use crate::app::AppState;
use crate::store::PackingStats;
use dioxus::prelude::*;

/// Footer text for the given progress
pub fn stats_message(stats: PackingStats, is_en: bool) -> String {
    match stats {
        PackingStats::Empty if is_en => "Start adding some items to your packing list 🚀".to_string(),
        PackingStats::Empty => "Commencez a ajouter des objets a votre liste 🚀".to_string(),
        _ if stats.is_complete() && is_en => "You got everything! Ready to go ✈️".to_string(),
        _ if stats.is_complete() => "Tout est pret ! En route ✈️".to_string(),
        PackingStats::Progress {
            total,
            packed,
            percent,
        } => {
            if is_en {
                format!("💼 You have {total} items on your list, and you already packed {packed} ({percent}%)")
            } else {
                format!("💼 Vous avez {total} objets sur votre liste, et vous en avez deja emballe {packed} ({percent}%)")
            }
        }
    }
}

#[component]
pub fn Stats() -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();
    let message = stats_message(app_state.store.read().stats(), is_en);

    rsx! {
        footer {
            class: "stats",
            em { "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert!(stats_message(PackingStats::Empty, true).starts_with("Start adding"));
    }

    #[test]
    fn test_progress_message() {
        let stats = PackingStats::Progress {
            total: 2,
            packed: 1,
            percent: 50,
        };
        let message = stats_message(stats, true);
        assert!(message.contains("2 items"));
        assert!(message.contains("packed 1 (50%)"));
    }

    #[test]
    fn test_complete_message_with_small_list() {
        let stats = PackingStats::Progress {
            total: 3,
            packed: 3,
            percent: 100,
        };
        assert!(stats_message(stats, true).starts_with("You got everything"));
        assert!(stats_message(stats, false).starts_with("Tout est pret"));
    }
}
