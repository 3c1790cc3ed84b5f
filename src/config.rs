//! Controller tunables.
//!
//! Every threshold the page behavior depends on lives here so the embedding
//! page can override it with a JSON blob at mount time.

use serde::Deserialize;

/// Tunables for the page controller. Defaults match the marketing site's
/// shipped behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Scroll offset (px) past which the navbar gets its elevated treatment.
    pub navbar_scroll_threshold: f64,
    /// Offset (px) subtracted from a section's top when deciding which
    /// section the viewport is currently in.
    pub section_probe_offset: f64,
    /// Distance (px) from the bottom of the viewport at which a reveal
    /// element becomes visible.
    pub reveal_offset: f64,
    /// Quiet period (ms) for the debounced scroll handler.
    pub debounce_ms: u32,
    /// Total counter animation duration (ms).
    pub counter_duration_ms: f64,
    /// Assumed frame interval (ms) used to derive the per-frame increment.
    pub counter_frame_ms: f64,
    /// Counters with a target at or above this value are left untouched.
    pub counter_max_target: u32,
    /// Fraction of the stat container that must be visible to start the
    /// counter animation.
    pub stats_visibility_threshold: f64,
    /// Endpoint the contact form posts to. `None` keeps the simulated
    /// always-successful submission.
    pub submit_url: Option<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 50.0,
            section_probe_offset: 100.0,
            reveal_offset: 100.0,
            debounce_ms: 10,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            counter_max_target: 1000,
            stats_visibility_threshold: 0.5,
            submit_url: None,
        }
    }
}

impl ControllerConfig {
    /// Parse overrides from a JSON object; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = ControllerConfig::default();
        assert_eq!(config.navbar_scroll_threshold, 50.0);
        assert_eq!(config.section_probe_offset, 100.0);
        assert_eq!(config.debounce_ms, 10);
        assert_eq!(config.counter_max_target, 1000);
        assert!(config.submit_url.is_none());
    }

    #[test]
    fn partial_json_keeps_defaults_for_absent_keys() {
        let config =
            ControllerConfig::from_json(r#"{"debounce_ms": 25, "submit_url": "/api/contact"}"#)
                .unwrap();
        assert_eq!(config.debounce_ms, 25);
        assert_eq!(config.submit_url.as_deref(), Some("/api/contact"));
        assert_eq!(config.navbar_scroll_threshold, 50.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ControllerConfig::from_json(r#"{"navbar_height": 64}"#).is_err());
    }
}
