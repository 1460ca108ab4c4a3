//! Entry point for the multi-theme switcher demo.
//!
//! This Dioxus desktop application renders the same three pages under
//! three complete visual themes, switchable at runtime from the header.

use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use switcher_app::components::App;
use switcher_app::settings;
use switcher_app::theme::Theme;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "theme-switcher")]
#[command(about = "Multi-theme demo: the same three pages under three visual identities")]
struct Args {
    /// Theme to start in
    #[arg(short, long, value_enum, default_value_t = Theme::Minimalist)]
    theme: Theme,

    /// Artificial delay for the mock item fetch, in milliseconds
    #[arg(long, default_value_t = 800)]
    fetch_delay_ms: u64,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!(
        "Starting Multi-Theme Switcher (initial theme: {})",
        args.theme.display_name()
    );

    settings::set_initial_theme(args.theme);
    settings::set_fetch_delay(Duration::from_millis(args.fetch_delay_ms));

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Multi-Theme Switcher")
                        .with_inner_size(LogicalSize::new(1360, 900))
                        .with_maximized(true),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&family=Playfair+Display:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}
