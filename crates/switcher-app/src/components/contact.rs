//! Contact page: contact info, the inert message form, and the FAQ.

use dioxus::prelude::*;

use crate::theme::{use_theme, Theme};

const CONTACT_INFO: [(&str, &str, &str, &str); 2] = [
    (
        "\u{2709}",
        "Email Us",
        "hello@themeswitcher.dev",
        "Questions about implementation",
    ),
    (
        "\u{2699}",
        "Repository",
        "github.com/theme-switcher/theme-switcher",
        "View source code & contribute",
    ),
];

const SUBJECTS: [&str; 6] = [
    "General Inquiry",
    "Implementation Help",
    "Collaboration",
    "Bug Report",
    "Feature Request",
    "Theme Customization",
];

const FAQ: [(&str, &str); 4] = [
    (
        "How do I implement this in my project?",
        "The demo keeps theme state in a context-provided store and styles \
         surfaces from static attribute bundles. You can download the source \
         code and adapt it to your needs.",
    ),
    (
        "Can I add more themes?",
        "Absolutely! The theme system is extensible. Add a new variant to the \
         theme enum with its attribute bundle and the compiler walks you \
         through every place that needs updating.",
    ),
    (
        "Is this mobile-friendly?",
        "Yes! All themes are built with a mobile-first approach and work \
         across all window sizes with responsive layout.",
    ),
    (
        "Can I use this commercially?",
        "This is a demo project. Check the license in the repository for \
         specific usage rights and commercial application guidelines.",
    ),
];

/// Contact page component.
#[component]
pub fn ContactPage() -> Element {
    let theme = *use_theme().read();
    let bundle = theme.bundle();

    rsx! {
        div {
            class: "page",
            div {
                class: "{bundle.container}",

                section {
                    class: "hero",
                    h1 { class: "hero-title", "Get In Touch" }
                    p {
                        class: "hero-subtitle",
                        "Have questions about multi-theme implementation? Want to "
                        "collaborate? We'd love to hear from you."
                    }
                }

                div {
                    class: if theme == Theme::ColorfulCreative { "split-grid" } else { "{bundle.spacing}" },

                    ContactInfoCard {}
                    MessageForm {}
                }

                FaqCard {}
            }
        }
    }
}

/// Contact details plus the development status block.
#[component]
fn ContactInfoCard() -> Element {
    rsx! {
        section {
            class: "card",
            h3 { "Contact Information" }

            div {
                class: "contact-list",
                for (icon, title, value, desc) in CONTACT_INFO {
                    div {
                        key: "{title}",
                        class: "contact-entry",
                        span { class: "contact-icon", "{icon}" }
                        div {
                            class: "contact-entry-text",
                            h4 { "{title}" }
                            p { class: "contact-value", "{value}" }
                            p { class: "contact-desc", "{desc}" }
                        }
                    }
                }
            }

            div {
                class: "status-block",
                h4 { "Development Status" }
                div {
                    class: "status-list",
                    div {
                        class: "status-row",
                        span { "Demo Version" }
                        span { "v1.0.0" }
                    }
                    div {
                        class: "status-row",
                        span { "Last Updated" }
                        span { "August 2026" }
                    }
                    div {
                        class: "status-row",
                        span { "Status" }
                        span { class: "status-accent", "Completed Development" }
                    }
                }
            }
        }
    }
}

/// The message form. Static by design: submit only swallows the event,
/// no network call is made.
#[component]
fn MessageForm() -> Element {
    rsx! {
        section {
            class: "card",
            h3 { "Send us a Message" }

            form {
                class: "message-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    tracing::info!("Contact form submitted (demo: no message is sent)");
                },

                div {
                    class: "form-grid",
                    div {
                        class: "form-field",
                        label { class: "form-label", "First Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "John",
                        }
                    }
                    div {
                        class: "form-field",
                        label { class: "form-label", "Last Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Doe",
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { class: "form-label", "Email Address" }
                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "john@example.com",
                    }
                }

                div {
                    class: "form-field",
                    label { class: "form-label", "Subject" }
                    select {
                        class: "form-select",
                        for subject in SUBJECTS {
                            option { key: "{subject}", value: "{subject}", "{subject}" }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { class: "form-label", "Message" }
                    textarea {
                        class: "form-textarea",
                        rows: "5",
                        placeholder: "Tell us about your project or ask questions about multi-theme implementation...",
                    }
                }

                button {
                    class: "btn btn--primary btn--block",
                    r#type: "submit",
                    span { class: "btn-icon", "\u{2709}" }
                    span { "Send Message" }
                }
            }
        }
    }
}

/// Frequently asked questions.
#[component]
fn FaqCard() -> Element {
    rsx! {
        section {
            class: "card faq-card",
            h3 { class: "faq-heading", "Frequently Asked Questions" }
            div {
                class: "faq-grid",
                for (question, answer) in FAQ {
                    div {
                        key: "{question}",
                        class: "faq-entry",
                        h4 { "{question}" }
                        p { "{answer}" }
                    }
                }
            }
        }
    }
}
