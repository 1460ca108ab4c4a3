//! Showcase card for a single demo item.

use dioxus::prelude::*;
use switcher_core::DemoItem;

use crate::theme::{use_theme, Theme};

/// A single showcase card: image, blurb, feature pills, rating, and a
/// call-to-action button.
#[component]
pub fn DemoCard(item: DemoItem, index: usize) -> Element {
    let theme = *use_theme().read();
    let stagger = theme.bundle().stagger_ms * index as u32;

    rsx! {
        article {
            class: "card demo-card card-enter",
            style: "animation-delay: {stagger}ms;",

            div {
                class: "demo-card-media",
                img {
                    class: "demo-card-image",
                    src: "{item.image}",
                    alt: "{item.title}",
                }
                if theme == Theme::ColorfulCreative {
                    span { class: "demo-badge", "DEMO" }
                }
            }

            h3 { class: "demo-card-title", "{item.title}" }
            p { class: "demo-card-description", "{item.description}" }

            div {
                class: "feature-pills",
                for feature in item.features.iter() {
                    span {
                        key: "{feature}",
                        class: "feature-pill",
                        "{feature}"
                    }
                }
            }

            div {
                class: "demo-card-meta",
                div {
                    class: "rating-row",
                    span { class: "rating-star", "\u{2605}" }
                    span { class: "rating-rate", "{item.rating.rate}" }
                    span { class: "rating-count", "({item.rating.count} views)" }
                }
                span { class: "demo-card-category", "{item.category_display()}" }
            }

            button {
                class: "btn btn--primary btn--block",
                span { "View Demo" }
                span { class: "btn-icon", "\u{2192}" }
            }
        }
    }
}
