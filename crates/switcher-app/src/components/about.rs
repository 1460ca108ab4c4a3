//! About page: the theme gallery.

use dioxus::prelude::*;

use crate::theme::{use_theme, Theme};

/// Per-theme profile shown in the gallery.
struct ThemeProfile {
    name: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const PROFILES: [ThemeProfile; 3] = [
    ThemeProfile {
        name: "Minimalist",
        description: "Clean, professional design with subtle gradients and refined typography",
        features: [
            "Light color palette",
            "Subtle shadows",
            "Professional fonts",
            "Blue accents",
        ],
    },
    ThemeProfile {
        name: "Dark Professional",
        description: "Sophisticated dark mode with amber highlights and serif typography",
        features: [
            "Dark slate background",
            "Amber accents",
            "Serif fonts",
            "Elegant gradients",
        ],
    },
    ThemeProfile {
        name: "Creative Colorful",
        description: "Vibrant, playful interface with rainbow gradients and bold styling",
        features: [
            "Colorful gradients",
            "Rounded corners",
            "Monospace fonts",
            "Purple/Pink theme",
        ],
    },
];

const IMPLEMENTATION_NOTES: [&str; 6] = [
    "Context-provided stores for theme and page state",
    "Exhaustive enum dispatch for pages and themes",
    "Static attribute bundles per theme",
    "CSS custom properties for palette switching",
    "Component-based architecture",
    "Responsive layout in every theme",
];

const USE_CASES: [&str; 6] = [
    "Multi-brand applications",
    "User preference systems",
    "A/B testing different designs",
    "Accessibility accommodations",
    "White-label solutions",
    "Mood-based interfaces",
];

/// About page component.
#[component]
pub fn AboutPage() -> Element {
    let theme = *use_theme().read();
    let bundle = theme.bundle();

    rsx! {
        div {
            class: "page",
            div {
                class: "{bundle.container}",

                section {
                    class: "hero",
                    h1 { class: "hero-title", "Theme Gallery" }
                    p {
                        class: "hero-subtitle",
                        "Explore the unique characteristics and design philosophy behind each theme"
                    }
                }

                div {
                    class: "{bundle.spacing}",

                    section {
                        class: "card",
                        h2 { "About This" }
                        p {
                            "This multi-theme switcher demonstrates how a single application "
                            "can provide completely different user experiences through dynamic "
                            "theming. Each theme isn't just a color change – it's a complete "
                            "design system with unique typography, spacing, animations, and "
                            "layout approaches."
                        }
                        p {
                            "Built with Rust and Dioxus, this demo showcases the power of "
                            "context-based theming and how desktop applications can adapt to "
                            "user preferences and different use cases."
                        }
                    }

                    section {
                        class: "gallery-grid",
                        for profile in PROFILES.iter() {
                            div {
                                key: "{profile.name}",
                                class: "card",
                                h3 { "{profile.name}" }
                                p { "{profile.description}" }
                                h4 { class: "feature-list-heading", "Key Features:" }
                                ul {
                                    class: "feature-list",
                                    for feature in profile.features.iter() {
                                        li {
                                            key: "{feature}",
                                            span { class: "feature-dot" }
                                            span { "{feature}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: if theme == Theme::ColorfulCreative { "split-grid" } else { "stack stack--md" },
                        div {
                            class: "card",
                            h3 { "Technical Implementation" }
                            ul {
                                class: "plain-list",
                                for note in IMPLEMENTATION_NOTES {
                                    li { key: "{note}", "\u{2022} {note}" }
                                }
                            }
                        }
                        div {
                            class: "card",
                            h3 { "Use Cases" }
                            ul {
                                class: "plain-list",
                                for use_case in USE_CASES {
                                    li { key: "{use_case}", "\u{2022} {use_case}" }
                                }
                            }
                        }
                    }
                }

                section {
                    class: "card cta-card",
                    h3 { "Experience All Three Themes" }
                    p {
                        "Use the theme selector in the header to switch between all "
                        "available themes and see how dramatically the interface transforms."
                    }
                    button { class: "btn btn--primary", "Switch Themes Now" }
                }
            }
        }
    }
}
