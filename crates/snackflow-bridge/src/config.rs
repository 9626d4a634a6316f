use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{lifecycle::LifecycleState, request::SnackbarDuration};

/// Timing and gating of snackbar delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnackbarConfig {
    /// How long a [`SnackbarDuration::Short`] snackbar stays, in milliseconds.
    pub short_duration_ms: u64,
    /// How long a [`SnackbarDuration::Long`] snackbar stays, in milliseconds.
    pub long_duration_ms: u64,
    /// Lowest host state in which snackbars are delivered.
    pub min_active_state: LifecycleState,
}

impl SnackbarConfig {
    /// Auto-dismiss timeout for `duration`, `None` when it never times out.
    pub fn timeout_for(&self, duration: SnackbarDuration) -> Option<Duration> {
        duration.timeout(
            Duration::from_millis(self.short_duration_ms),
            Duration::from_millis(self.long_duration_ms),
        )
    }
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            short_duration_ms: 4_000,
            long_duration_ms: 10_000,
            min_active_state: LifecycleState::Started,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Locale used to resolve string resources, e.g. `en` or `my`.
    pub locale: String,
    /// Configuration of snackbar delivery.
    pub snackbar: SnackbarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            snackbar: SnackbarConfig::default(),
        }
    }
}
