//! Home page: hero, feature trio, and the demo showcase grid.

use dioxus::prelude::*;

use crate::hooks::use_demo_items;
use crate::theme::use_theme;

use super::DemoCard;

/// Feature highlights shown under the hero.
const FEATURES: [(&str, &str, &str); 3] = [
    ("\u{25A3}", "3 Unique Themes", "Each with distinct personality"),
    ("\u{2699}", "Rust & Dioxus", "Type-safe component stack"),
    ("\u{26A1}", "Instant Switching", "Seamless theme transitions"),
];

/// Home page component.
#[component]
pub fn HomePage() -> Element {
    let theme = *use_theme().read();
    let bundle = theme.bundle();

    rsx! {
        div {
            class: "page",
            div {
                class: "{bundle.container}",

                // Hero
                section {
                    class: "hero {bundle.spacing}",
                    h1 { class: "hero-title", "Multi-Theme Switcher" }
                    p {
                        class: "hero-subtitle",
                        "Experience how different themes can completely transform user "
                        "experience. Switch between Minimalist, Dark Professional, and "
                        "Creative modes to see the magic."
                    }
                    div {
                        class: "hero-actions",
                        button {
                            class: "btn btn--primary",
                            span { "Try Theme Switching" }
                            span { class: "btn-icon", "\u{2756}" }
                        }
                        button { class: "btn btn--secondary", "View Code" }
                    }
                }

                // Feature trio
                section {
                    class: "feature-grid",
                    for (icon, title, desc) in FEATURES {
                        div {
                            key: "{title}",
                            class: "card feature-card",
                            span { class: "feature-icon", "{icon}" }
                            h3 { class: "feature-title", "{title}" }
                            p { class: "feature-desc", "{desc}" }
                        }
                    }
                }

                // Showcase
                section {
                    class: "showcase",
                    div {
                        class: "section-heading",
                        h2 { "Theme Demonstrations" }
                        p { "See how each theme transforms the same content" }
                    }
                    ShowcaseGrid {}
                }

                // Closing call to action
                section {
                    class: "card cta-card",
                    h3 { "Ready to Build Your Own Multi-Theme App?" }
                    p { "Download the source code and customize these themes for your next project." }
                    button { class: "btn btn--primary", "Get Source Code" }
                }
            }
        }
    }
}

/// The showcase grid with its three fetch states: loading spinner,
/// loaded cards, and the (never exercised by the mock) failure notice.
#[component]
fn ShowcaseGrid() -> Element {
    let theme = *use_theme().read();
    let bundle = theme.bundle();
    let items = use_demo_items();

    match &*items.read() {
        None => rsx! {
            div {
                class: "spinner-wrap",
                div { class: "spinner" }
                span { class: "spinner-mark", "\u{25A3}" }
            }
        },
        Some(Ok(items)) => rsx! {
            div {
                class: "{bundle.grid}",
                for (index, item) in items.iter().enumerate() {
                    DemoCard {
                        key: "{item.id}",
                        item: item.clone(),
                        index,
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div {
                class: "card fetch-error",
                h3 { "Showcase unavailable" }
                p { "{err}" }
            }
        },
    }
}
