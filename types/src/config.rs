//! Widget configuration types.
//!
//! These are plain serde structs so the same definitions can be read from a
//! TOML config file, passed over IPC, or built in code by a UI binding.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Media type tracked when no filter is configured.
pub const DEFAULT_MEDIA_TYPE: &str = "email";

/// How long the copy button stays in its success state.
pub const DEFAULT_SUCCESS_FLASH_MS: u64 = 3000;

/// How many interactions a tracker may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingPolicy {
    /// At most one interaction; later assignments are ignored until it ends.
    #[default]
    SingleSlot,
    /// Any number of concurrent interactions.
    MultiSlot,
}

impl TrackingPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleSlot => "single_slot",
            Self::MultiSlot => "multi_slot",
        }
    }
}

/// Which assigned interactions a tracker cares about.
///
/// Comparisons are ASCII case-insensitive. A filter without a direction accepts
/// interactions in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionFilter {
    pub media_type: String,
    pub direction: Option<String>,
}

impl Default for InteractionFilter {
    fn default() -> Self {
        Self {
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            direction: None,
        }
    }
}

impl InteractionFilter {
    pub fn media(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            direction: None,
        }
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Check an event's media type and direction against the filter.
    ///
    /// A missing media type never matches.
    ///
    /// # Examples
    /// ```
    /// use refwidget_types::InteractionFilter;
    /// let email = InteractionFilter::media("email");
    /// assert!(email.matches(Some("EMAIL"), None));
    /// assert!(!email.matches(Some("telephony"), None));
    /// assert!(!email.matches(None, None));
    ///
    /// let outbound = InteractionFilter::media("telephony").with_direction("OUTBOUND");
    /// assert!(outbound.matches(Some("telephony"), Some("outbound")));
    /// assert!(!outbound.matches(Some("telephony"), Some("INBOUND")));
    /// assert!(!outbound.matches(Some("telephony"), None));
    /// ```
    pub fn matches(&self, media_type: Option<&str>, direction: Option<&str>) -> bool {
        let Some(media_type) = media_type else {
            return false;
        };
        if !media_type.eq_ignore_ascii_case(&self.media_type) {
            return false;
        }
        match (&self.direction, direction) {
            (None, _) => true,
            (Some(want), Some(got)) => got.eq_ignore_ascii_case(want),
            (Some(_), None) => false,
        }
    }
}

/// Tracker settings: policy plus filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub policy: TrackingPolicy,
    pub filter: InteractionFilter,
}

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub tracking: TrackingConfig,
    pub success_flash_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tracking: TrackingConfig::default(),
            success_flash_ms: DEFAULT_SUCCESS_FLASH_MS,
        }
    }
}

impl WidgetConfig {
    pub fn success_flash(&self) -> Duration {
        Duration::from_millis(self.success_flash_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config_toml() {
        let toml = r#"
success_flash_ms = 1500

[tracking]
policy = "multi_slot"

[tracking.filter]
media_type = "telephony"
direction = "OUTBOUND"
"#;

        let config: WidgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.success_flash_ms, 1500);
        assert_eq!(config.tracking.policy, TrackingPolicy::MultiSlot);
        assert_eq!(config.tracking.filter.media_type, "telephony");
        assert_eq!(config.tracking.filter.direction.as_deref(), Some("OUTBOUND"));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: WidgetConfig = toml::from_str("").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.tracking.policy, TrackingPolicy::SingleSlot);
        assert_eq!(config.tracking.filter.media_type, DEFAULT_MEDIA_TYPE);
        assert_eq!(config.success_flash(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_filter_keeps_default_media_type() {
        let toml = r#"
[tracking.filter]
direction = "INBOUND"
"#;
        let config: WidgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.tracking.filter.media_type, "email");
        assert_eq!(config.tracking.filter.direction.as_deref(), Some("INBOUND"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let toml = r#"
[tracking]
policy = "round_robin"
"#;
        assert!(toml::from_str::<WidgetConfig>(toml).is_err());
    }

    #[test]
    fn round_trip_through_toml() {
        let config = WidgetConfig {
            tracking: TrackingConfig {
                policy: TrackingPolicy::MultiSlot,
                filter: InteractionFilter::media("email"),
            },
            success_flash_ms: 500,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: WidgetConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
