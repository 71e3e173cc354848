use dioxus::prelude::*;
use serpdash_core::StatCard;

#[component]
pub fn StatCardGrid(cards: Vec<StatCard>) -> Element {
    rsx! {
        div { class: "stat-cards",
            for card in cards.iter() {
                div { class: "stat-card", key: "{card.title}",
                    span { class: "stat-title", "{card.title}" }
                    span { class: "stat-value", "{card.value}" }
                }
            }
        }
    }
}
