//! Theme system for the demo application.
//!
//! Three complete visual identities over the same content. Palette and
//! typography ride on a `data-theme` attribute resolved by the embedded
//! stylesheet; structural attributes (content width, grid shape, spacing,
//! animation timing) live in a static [`ThemeBundle`] looked up per theme.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Minimalist,
    DarkProfessional,
    ColorfulCreative,
}

impl Theme {
    /// Returns the CSS `data-theme` attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Minimalist => "minimalist",
            Theme::DarkProfessional => "dark-professional",
            Theme::ColorfulCreative => "colorful-creative",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Minimalist => "Minimalist",
            Theme::DarkProfessional => "Dark Professional",
            Theme::ColorfulCreative => "Colorful Creative",
        }
    }

    /// Short label used in the header selector.
    pub fn short_name(&self) -> &'static str {
        match self {
            Theme::Minimalist => "Minimalist",
            Theme::DarkProfessional => "Dark Pro",
            Theme::ColorfulCreative => "Creative",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Minimalist,
            Theme::DarkProfessional,
            Theme::ColorfulCreative,
        ]
    }

    /// Looks up the structural attribute bundle for this theme.
    ///
    /// Total over the enum: every variant has exactly one bundle and no
    /// fallback arm exists.
    pub fn bundle(&self) -> &'static ThemeBundle {
        match self {
            Theme::Minimalist => &MINIMALIST,
            Theme::DarkProfessional => &DARK_PROFESSIONAL,
            Theme::ColorfulCreative => &COLORFUL_CREATIVE,
        }
    }

    /// Parses a `data-theme` value back into a theme.
    pub fn from_css_value(value: &str) -> Option<Theme> {
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.css_value() == value)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_value())
    }
}

/// Static presentational attributes for one theme.
///
/// Only structure and timing live here; colors and fonts are CSS custom
/// properties keyed off `data-theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBundle {
    pub name: &'static str,
    /// Content column class (wide or narrow measure).
    pub container: &'static str,
    /// Showcase grid class (column count differs per theme).
    pub grid: &'static str,
    /// Vertical rhythm class for stacked sections.
    pub spacing: &'static str,
    /// Base transition duration applied to themed surfaces.
    pub transition_ms: u32,
    /// Per-card entry animation stagger step.
    pub stagger_ms: u32,
    /// Whether the navigation sidebar renders alongside pages.
    pub has_sidebar: bool,
    /// Accent family name, for logging and debug display.
    pub accent: &'static str,
}

const MINIMALIST: ThemeBundle = ThemeBundle {
    name: "Minimalist",
    container: "container container--wide",
    grid: "demo-grid demo-grid--three",
    spacing: "stack stack--md",
    transition_ms: 200,
    stagger_ms: 60,
    has_sidebar: false,
    accent: "blue",
};

const DARK_PROFESSIONAL: ThemeBundle = ThemeBundle {
    name: "Dark Professional",
    container: "container container--narrow",
    grid: "demo-grid demo-grid--two",
    spacing: "stack stack--xl",
    transition_ms: 300,
    stagger_ms: 120,
    has_sidebar: true,
    accent: "amber",
};

const COLORFUL_CREATIVE: ThemeBundle = ThemeBundle {
    name: "Colorful Creative",
    container: "container container--wide",
    grid: "demo-grid demo-grid--four",
    spacing: "stack stack--lg",
    transition_ms: 300,
    stagger_ms: 80,
    has_sidebar: false,
    accent: "violet",
};

/// Returns the theme store provided by the root component.
///
/// Panics when called outside the provider; reading the store without an
/// active session context is a programming error, not a runtime condition.
pub fn use_theme() -> Signal<Theme> {
    try_use_context::<Signal<Theme>>()
        .expect("use_theme must be called inside the theme provider")
}

/// Themed wrapper component.
///
/// Applies the current theme's `data-theme` attribute and transition
/// duration at the root so every surface below restyles on switch.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *use_theme().read();
    let bundle = theme.bundle();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            style: "--transition-ms: {bundle.transition_ms}ms;",
            {children}
        }
    }
}

/// Theme selector dropdown for the header.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut store = use_theme();
    let current = *store.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                class: "theme-select",
                value: current.css_value(),
                onchange: move |evt| {
                    let value = evt.value();
                    let next = Theme::from_css_value(&value).unwrap_or_default();
                    tracing::info!("Switching theme to {}", next.display_name());
                    store.set(next);
                },
                for theme in Theme::all() {
                    option {
                        value: theme.css_value(),
                        selected: *theme == current,
                        "{theme.short_name()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_minimalist() {
        assert_eq!(Theme::default(), Theme::Minimalist);
    }

    #[test]
    fn test_all_lists_each_theme_once() {
        let all = Theme::all();
        assert_eq!(all.len(), 3);
        for theme in [
            Theme::Minimalist,
            Theme::DarkProfessional,
            Theme::ColorfulCreative,
        ] {
            assert_eq!(all.iter().filter(|t| **t == theme).count(), 1);
        }
    }

    #[test]
    fn test_css_values_and_names_are_unique() {
        use std::collections::HashSet;

        let values: HashSet<&str> = Theme::all().iter().map(|t| t.css_value()).collect();
        let names: HashSet<&str> = Theme::all().iter().map(|t| t.display_name()).collect();
        assert_eq!(values.len(), Theme::all().len());
        assert_eq!(names.len(), Theme::all().len());
    }

    #[test]
    fn test_css_value_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_css_value(theme.css_value()), Some(*theme));
        }
        assert_eq!(Theme::from_css_value("no-such-theme"), None);
    }

    #[test]
    fn test_only_dark_professional_has_sidebar() {
        assert!(Theme::DarkProfessional.bundle().has_sidebar);
        assert!(!Theme::Minimalist.bundle().has_sidebar);
        assert!(!Theme::ColorfulCreative.bundle().has_sidebar);
    }

    #[test]
    fn test_bundles_differ_where_themes_differ() {
        let minimalist = Theme::Minimalist.bundle();
        let dark = Theme::DarkProfessional.bundle();
        let creative = Theme::ColorfulCreative.bundle();

        // Dark Professional uses the narrow measure, the others the wide one.
        assert_ne!(minimalist.container, dark.container);
        assert_eq!(minimalist.container, creative.container);

        // Grid shape is distinct for each theme.
        assert_ne!(minimalist.grid, dark.grid);
        assert_ne!(dark.grid, creative.grid);
        assert_ne!(minimalist.grid, creative.grid);

        // Minimalist transitions fastest.
        assert!(minimalist.transition_ms < dark.transition_ms);
    }

    #[test]
    fn test_bundle_name_matches_display_name() {
        for theme in Theme::all() {
            assert_eq!(theme.bundle().name, theme.display_name());
        }
    }
}
