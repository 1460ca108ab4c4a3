//! Root application component and page dispatch.

use dioxus::prelude::*;

use crate::settings;
use crate::state::{use_navigation, Page};
use crate::theme::{use_theme, Theme, ThemedRoot};

use super::{AboutPage, ContactPage, Header, HomePage, Sidebar};

/// Root component.
///
/// Provides the theme and page stores, applies the themed root wrapper,
/// and renders the header plus the active page body.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(settings::initial_theme()));
    use_context_provider(|| Signal::new(Page::default()));

    rsx! {
        ThemedRoot {
            div {
                class: "app-shell",
                Header {}
                PageBody {}
            }
        }
    }
}

/// Dispatches to exactly the active page.
///
/// One arm per page; adding a page extends the enum and this match, both
/// checked at compile time. Dark Professional additionally wraps every
/// page with the navigation sidebar.
#[component]
fn PageBody() -> Element {
    let page = *use_navigation().read();
    let theme: Theme = *use_theme().read();

    let body = match page {
        Page::Home => rsx! { HomePage {} },
        Page::About => rsx! { AboutPage {} },
        Page::Contact => rsx! { ContactPage {} },
    };

    if theme.bundle().has_sidebar {
        rsx! {
            div {
                class: "with-sidebar",
                Sidebar {}
                main {
                    class: "main-pane",
                    {body}
                }
            }
        }
    } else {
        rsx! {
            main {
                class: "main-pane",
                {body}
            }
        }
    }
}
