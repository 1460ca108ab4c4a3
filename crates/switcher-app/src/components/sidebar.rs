//! Navigation sidebar, rendered only under the Dark Professional theme.

use dioxus::prelude::*;

use crate::state::{use_navigation, Page};

/// Sidebar with labeled navigation entries.
#[component]
pub fn Sidebar() -> Element {
    let mut navigation = use_navigation();
    let current = *navigation.read();

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-head",
                h2 { class: "sidebar-title", "Navigation" }
                p { class: "sidebar-subtitle", "Professional Dashboard" }
            }

            nav {
                class: "sidebar-nav",
                for page in Page::all() {
                    button {
                        key: "{page.display_name()}",
                        class: if *page == current { "sidebar-item sidebar-item--active" } else { "sidebar-item" },
                        onclick: move |_| navigation.set(*page),
                        span { class: "sidebar-item-icon", "{page.icon()}" }
                        span {
                            class: "sidebar-item-text",
                            span { class: "sidebar-item-label", "{page.display_name()}" }
                            span { class: "sidebar-item-desc", "{page.description()}" }
                        }
                    }
                }
            }
        }
    }
}
