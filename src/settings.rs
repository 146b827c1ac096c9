//! Serializable composer settings for host/frontend communication.
//!
//! [`ComposerSettings`] captures the selection state in a format that can be
//! serialized to JSON and sent between a UI process and the composition
//! backend. It carries choices, not photos; the collection itself is never
//! serialized.
//!
//! # Example
//!
//! ```
//! use poster_composer::ComposerSettings;
//!
//! let settings = ComposerSettings::new()
//!     .with_background("#0000ff")
//!     .with_report_decode_failures(true);
//!
//! let json = settings.to_json().unwrap();
//! let restored = ComposerSettings::from_json(&json).unwrap();
//! assert_eq!(restored.background.as_deref(), Some("#0000ff"));
//! ```

use serde::{Deserialize, Serialize};

/// A serializable snapshot of the composer's selection state.
///
/// Fields left as `None` mean "keep the current value" when applied.
///
/// # JSON Format
///
/// ```json
/// {
///   "background": "#00ff00",
///   "reportDecodeFailures": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComposerSettings {
    /// Background color as a hex string or CSS color name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Whether decode failures should appear in ingest reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_decode_failures: Option<bool>,
}

impl ComposerSettings {
    /// Creates an empty settings snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color string.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Sets whether decode failures are reported.
    pub fn with_report_decode_failures(mut self, report: bool) -> Self {
        self.report_decode_failures = Some(report);
        self
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the settings to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_roundtrip() {
        let settings = ComposerSettings::new()
            .with_background("#123456")
            .with_report_decode_failures(true);

        let json = settings.to_json().unwrap();
        let restored = ComposerSettings::from_json(&json).unwrap();

        assert_eq!(restored.background.as_deref(), Some("#123456"));
        assert_eq!(restored.report_decode_failures, Some(true));
    }

    #[test]
    fn json_uses_camel_case() {
        let settings = ComposerSettings::new().with_report_decode_failures(false);
        let json = settings.to_json().unwrap();

        assert!(json.contains("\"reportDecodeFailures\""));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let json = ComposerSettings::new().with_background("red").to_json().unwrap();

        assert!(json.contains("\"background\""));
        assert!(!json.contains("reportDecodeFailures"));
    }

    #[test]
    fn empty_settings_deserialize() {
        let settings = ComposerSettings::from_json("{}").unwrap();

        assert!(settings.background.is_none());
        assert!(settings.report_decode_failures.is_none());
    }
}
