//! Page configuration with `data-*` overrides.
//!
//! # Design
//! - Every constant of the page script lives here with its default.
//! - Overrides are read through a lookup closure so parsing stays DOM-free.
//! - Blank or unparsable overrides fall back to the default silently.

use std::time::Duration;

/// Dataset key (`data-health-path`) overriding the health endpoint path.
pub const HEALTH_PATH_KEY: &str = "healthPath";
/// Dataset key (`data-toast-duration-ms`) overriding the auto-dismiss delay.
pub const TOAST_DURATION_KEY: &str = "toastDurationMs";
/// Dataset key (`data-stagger-ms`) overriding the card stagger step.
pub const STAGGER_KEY: &str = "staggerMs";

/// Default health endpoint path.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Longest delay `setTimeout` honours (2^31 - 1 ms); longer values fire immediately.
pub const MAX_TIMER_DELAY: Duration = Duration::from_millis(2_147_483_647);

/// Notification lifecycle timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    /// Delay before an untouched notification starts leaving.
    pub auto_dismiss: Duration,
    /// Length of the exit animation; the element detaches once it elapses.
    pub exit_animation: Duration,
}

impl ToastTiming {
    /// Upper bound between mount and detach for a notification nobody closes.
    #[must_use]
    pub fn max_lifetime(&self) -> Duration {
        self.auto_dismiss + self.exit_animation
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            auto_dismiss: Duration::from_millis(3000),
            exit_animation: Duration::from_millis(300),
        }
    }
}

/// Resolved configuration for the page hooks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Selector matching card elements.
    pub card_selector: String,
    /// Class added to every card at page-ready.
    pub loading_class: String,
    /// Animation delay added per card index.
    pub stagger_step: Duration,
    /// Path requested by the health check.
    pub health_path: String,
    /// Notification timings.
    pub timing: ToastTiming,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            card_selector: ".card".to_string(),
            loading_class: "loading".to_string(),
            stagger_step: Duration::from_millis(100),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            timing: ToastTiming::default(),
        }
    }
}

impl PageConfig {
    /// Build a configuration from dataset-style overrides.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(HEALTH_PATH_KEY) {
            let path = path.trim();
            if path.starts_with('/') {
                config.health_path = path.to_string();
            }
        }
        if let Some(ms) = lookup(TOAST_DURATION_KEY).and_then(|raw| parse_millis(&raw)) {
            config.timing.auto_dismiss = ms;
        }
        if let Some(ms) = lookup(STAGGER_KEY).and_then(|raw| parse_millis(&raw)) {
            config.stagger_step = ms;
        }
        config
    }

    /// Selector for the control that triggers the health check.
    #[must_use]
    pub fn trigger_selector(&self) -> String {
        format!("a[href=\"{}\"]", self.health_path)
    }
}

fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .map(|ms| Duration::from_millis(ms).min(MAX_TIMER_DELAY))
}
