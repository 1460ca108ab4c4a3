//! Page-selection store.
//!
//! Volatile navigation state: one active page per session, mutated only by
//! menu clicks. No history stack and no deep-linking.

use dioxus::prelude::*;

/// Pages of the demo site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
}

impl Page {
    /// Menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "Demo",
            Page::About => "Themes",
            Page::Contact => "Contact",
        }
    }

    /// One-line description shown under the sidebar label.
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Multi-Theme Showcase",
            Page::About => "Theme Gallery",
            Page::Contact => "Get In Touch",
        }
    }

    /// Menu glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "\u{2302}",
            Page::About => "\u{2756}",
            Page::Contact => "\u{2709}",
        }
    }

    /// Returns all pages in menu order.
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::About, Page::Contact]
    }
}

/// Returns the page store provided by the root component.
///
/// Panics when called outside the provider, mirroring the theme store's
/// fail-fast contract.
pub fn use_navigation() -> Signal<Page> {
    try_use_context::<Signal<Page>>()
        .expect("use_navigation must be called inside the page provider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_all_lists_each_page_once() {
        let all = Page::all();
        assert_eq!(all.len(), 3);
        for page in [Page::Home, Page::About, Page::Contact] {
            assert_eq!(all.iter().filter(|p| **p == page).count(), 1);
        }
    }

    #[test]
    fn test_menu_labels_are_unique() {
        use std::collections::HashSet;

        let labels: HashSet<&str> = Page::all().iter().map(|p| p.display_name()).collect();
        assert_eq!(labels.len(), Page::all().len());
    }

    #[test]
    fn test_page_and_theme_state_are_independent_values() {
        use crate::theme::Theme;

        // The stores hold plain copies; writing one cannot alter the other.
        let mut session = (Theme::default(), Page::default());
        session.1 = Page::Contact;
        assert_eq!(session.0, Theme::Minimalist);
        session.0 = Theme::DarkProfessional;
        assert_eq!(session.1, Page::Contact);
    }
}
