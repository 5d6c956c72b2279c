use serde::{Deserialize, Serialize};

use crate::route::AddressMode;
use crate::tour_layout::TourLayoutConfig;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/elysianhub74@gmail.com";
pub const DEFAULT_DEEP_LINK_SCROLL_DELAY_MS: u32 = 100;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("relay endpoint is required")]
    EmptyRelayEndpoint,
    #[error("relay endpoint must be an absolute http(s) URL")]
    InvalidRelayEndpoint,
    #[error("tour layout value `{0}` must be positive")]
    NonPositiveLayoutValue(&'static str),
    #[error("config override is not valid JSON: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub relay_endpoint: String,
    pub address_mode: AddressMode,
    pub tour_layout: TourLayoutConfig,
    pub deep_link_scroll_delay_ms: u32,
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            address_mode: AddressMode::Path,
            tour_layout: TourLayoutConfig::default(),
            deep_link_scroll_delay_ms: DEFAULT_DEEP_LINK_SCROLL_DELAY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Parses a JSON override on top of the defaults and validates it.
    pub fn from_json_override(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)
            .map_err(|error| ConfigError::InvalidJson(error.to_string()))?;
        config.validated()
    }

    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.relay_endpoint = normalize_relay_endpoint(&self.relay_endpoint)?;
        validate_tour_layout(&self.tour_layout)?;
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        Ok(self)
    }
}

pub fn normalize_relay_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyRelayEndpoint);
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidRelayEndpoint);
    };
    if !matches!(scheme, "http" | "https") {
        return Err(ConfigError::InvalidRelayEndpoint);
    }
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidRelayEndpoint);
    }
    Ok(trimmed.to_string())
}

fn validate_tour_layout(layout: &TourLayoutConfig) -> Result<(), ConfigError> {
    let checks = [
        ("tooltip_width", layout.tooltip_width),
        ("mobile_breakpoint", layout.mobile_breakpoint),
    ];
    for (name, value) in checks {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::NonPositiveLayoutValue(name));
        }
    }
    let non_negative = [
        ("tooltip_margin", layout.tooltip_margin),
        ("viewport_padding", layout.viewport_padding),
        ("spotlight_margin", layout.spotlight_margin),
        ("mobile_inset", layout.mobile_inset),
    ];
    for (name, value) in non_negative {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::NonPositiveLayoutValue(name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_post_to_the_form_relay() {
        let config = ShellConfig::default();
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.address_mode, AddressMode::Path);
        assert_eq!(config.deep_link_scroll_delay_ms, 100);
        assert_eq!(config.tour_layout.tooltip_width, 320.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let Ok(config) = ShellConfig::from_json_override(
            r#"{"address_mode":"hash","tour_layout":{"mobile_breakpoint":640}}"#,
        ) else {
            unreachable!("partial override is valid");
        };
        assert_eq!(config.address_mode, AddressMode::Hash);
        assert_eq!(config.tour_layout.mobile_breakpoint, 640.0);
        assert_eq!(config.tour_layout.tooltip_width, 320.0);
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn relay_endpoint_is_trimmed_and_checked() {
        assert_eq!(
            normalize_relay_endpoint(" https://relay.example/form/ "),
            Ok("https://relay.example/form".to_string())
        );
        assert_eq!(normalize_relay_endpoint("  "), Err(ConfigError::EmptyRelayEndpoint));
        assert_eq!(
            normalize_relay_endpoint("ftp://relay.example"),
            Err(ConfigError::InvalidRelayEndpoint)
        );
        assert_eq!(
            normalize_relay_endpoint("relay.example"),
            Err(ConfigError::InvalidRelayEndpoint)
        );
        assert_eq!(normalize_relay_endpoint("https:///form"), Err(ConfigError::InvalidRelayEndpoint));
    }

    #[test]
    fn bad_overrides_are_rejected() {
        assert!(matches!(
            ShellConfig::from_json_override("{not json"),
            Err(ConfigError::InvalidJson(_))
        ));
        assert_eq!(
            ShellConfig::from_json_override(r#"{"tour_layout":{"tooltip_width":0}}"#).err(),
            Some(ConfigError::NonPositiveLayoutValue("tooltip_width"))
        );
        assert!(matches!(
            ShellConfig::from_json_override(r#"{"address_mode":"query"}"#),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let Ok(config) = ShellConfig::from_json_override(r#"{"log_filter":" "}"#) else {
            unreachable!("blank filter is accepted");
        };
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
