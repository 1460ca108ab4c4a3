//! Process-wide launch settings.
//!
//! Written once from command-line arguments before the UI launches, then
//! read by components. Nothing here changes after startup.

use std::sync::OnceLock;
use std::time::Duration;

use crate::theme::Theme;

static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();
static FETCH_DELAY: OnceLock<Duration> = OnceLock::new();

/// Records the theme selected on the command line.
pub fn set_initial_theme(theme: Theme) {
    INITIAL_THEME.set(theme).ok();
}

/// Theme the session starts in. Minimalist unless overridden at launch.
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Records the mock fetch delay selected on the command line.
pub fn set_fetch_delay(delay: Duration) {
    FETCH_DELAY.set(delay).ok();
}

/// Artificial delay applied by the mock item source.
pub fn fetch_delay() -> Duration {
    FETCH_DELAY
        .get()
        .copied()
        .unwrap_or(switcher_core::DEFAULT_FETCH_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_before_any_set() {
        // OnceLock cells are empty in the test process until set, so the
        // getters fall back to the documented defaults.
        assert_eq!(initial_theme(), Theme::Minimalist);
        assert_eq!(fetch_delay(), switcher_core::DEFAULT_FETCH_DELAY);
    }
}
