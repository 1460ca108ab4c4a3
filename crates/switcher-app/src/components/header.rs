//! Fixed header with navigation and the theme selector.

use dioxus::prelude::*;

use crate::state::{use_navigation, Page};
use crate::theme::ThemeSwitcher;

/// Header component: logo, desktop navigation, theme selector, and the
/// collapsible mobile menu.
#[component]
pub fn Header() -> Element {
    let mut navigation = use_navigation();
    let current = *navigation.read();
    let mut mobile_menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "header",

            div {
                class: "header-inner",

                div {
                    class: "logo",
                    span { class: "logo-mark", "\u{25A3}" }
                    span { "ThemeSwitcher" }
                }

                // Desktop navigation
                nav {
                    class: "nav nav--desktop",
                    for page in Page::all() {
                        button {
                            key: "{page.display_name()}",
                            class: if *page == current { "nav-button nav-button--active" } else { "nav-button" },
                            onclick: move |_| navigation.set(*page),
                            span { class: "nav-icon", "{page.icon()}" }
                            span { "{page.display_name()}" }
                        }
                    }
                }

                div {
                    class: "header-controls",

                    ThemeSwitcher {}

                    button {
                        class: "mobile-toggle",
                        onclick: move |_| {
                            let open = *mobile_menu_open.read();
                            mobile_menu_open.set(!open);
                        },
                        if *mobile_menu_open.read() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            // Collapsible mobile navigation
            if *mobile_menu_open.read() {
                nav {
                    class: "nav nav--mobile",
                    for page in Page::all() {
                        button {
                            key: "{page.display_name()}",
                            class: if *page == current { "nav-button nav-button--active" } else { "nav-button" },
                            onclick: move |_| {
                                navigation.set(*page);
                                mobile_menu_open.set(false);
                            },
                            span { class: "nav-icon", "{page.icon()}" }
                            span { "{page.display_name()}" }
                        }
                    }
                }
            }
        }
    }
}
