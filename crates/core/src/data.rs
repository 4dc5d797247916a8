//! Wire data model pushed by the host.
//!
//! Payloads arrive as JSON with camelCase field names. Two stream shapes
//! exist: time-series symbols receive an `events` array per stream,
//! single-value symbols receive one `value`/`timestamp` pair. Both shapes
//! share the envelope, colour, and path fields, so one [`Series`] type
//! covers them with the unused side left at its default.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One observation in a time-series stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Host-formatted timestamp, kept opaque. See [`Sample::time`].
    pub timestamp: String,
    pub value: f64,
}

impl Sample {
    /// Parse the timestamp as RFC 3339, when it is one.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// Value of a single-shape stream.
///
/// Enumeration states arrive as objects carrying their display name, e.g.
/// `{"Name": "Active", "Value": 1}`; only the name matters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
    Enumeration {
        #[serde(rename = "Name")]
        name: String,
    },
}

impl ScalarValue {
    /// Display text, unwrapping enumeration names.
    pub fn display(&self) -> String {
        match self {
            Self::Number(v) => format!("{v}"),
            Self::Text(s) => s.clone(),
            Self::Enumeration { name } => name.clone(),
        }
    }
}

/// One data stream delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Stream colour as a hex string; empty means "let the symbol pick".
    #[serde(default)]
    pub color: String,
    /// Backslash-delimited source path, e.g. `\\SRV1\Plant\Flow Rate`.
    #[serde(default)]
    pub path: String,
    /// Stepped-trace flag as delivered by the host (0 or 1).
    #[serde(default)]
    pub step: f64,
    /// Observations; populated for time-series shaped symbols.
    #[serde(default)]
    pub events: Vec<Sample>,
    /// Current value; populated for single-value shaped symbols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ScalarValue>,
    /// Timestamp of `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Host-side point type, e.g. `"Float32"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Data quality flag; `false` marks a questionable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<bool>,
}

impl Series {
    /// Display title: the last segment of the backslash-delimited path.
    pub fn title(&self) -> &str {
        self.path.rsplit('\\').next().unwrap_or(self.path.as_str())
    }
}

/// Top-level payload pushed by the host.
///
/// An absent or empty `body` is the valid "no data yet" state, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope {
    #[serde(default)]
    pub body: Vec<Series>,
}

impl DataEnvelope {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Stable identity key used when reconciling per-series display state:
/// the series path, or a positional fallback when the path is empty.
pub fn series_key(path: &str, index: usize) -> String {
    if path.is_empty() {
        format!("#{index}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_time_series_payload() {
        let json = r##"{
            "body": [{
                "color": "#ff0000",
                "path": "\\\\SRV1\\Plant\\Flow Rate",
                "step": 0,
                "events": [
                    {"timestamp": "2024-03-01T00:00:00Z", "value": 1.5},
                    {"timestamp": "2024-03-01T00:01:00Z", "value": 2.0}
                ]
            }]
        }"##;
        let env: DataEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.body.len(), 1);
        let series = &env.body[0];
        assert_eq!(series.color, "#ff0000");
        assert_eq!(series.title(), "Flow Rate");
        assert_eq!(series.events.len(), 2);
        assert_eq!(series.events[1].value, 2.0);
    }

    #[test]
    fn missing_body_is_the_empty_state() {
        let env: DataEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn deserializes_single_value_shapes() {
        let json = r#"{
            "body": [
                {"path": "\\\\SRV1\\A", "value": 42.5, "timestamp": "t", "type": "Float32", "good": true},
                {"path": "\\\\SRV1\\B", "value": "off-line"},
                {"path": "\\\\SRV1\\C", "value": {"Name": "Active", "Value": 1}}
            ]
        }"#;
        let env: DataEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.body[0].value, Some(ScalarValue::Number(42.5)));
        assert_eq!(env.body[0].data_type.as_deref(), Some("Float32"));
        assert_eq!(env.body[1].value.as_ref().unwrap().display(), "off-line");
        assert_eq!(env.body[2].value.as_ref().unwrap().display(), "Active");
    }

    #[test]
    fn title_of_pathless_series_is_empty() {
        let series = Series::default();
        assert_eq!(series.title(), "");
    }

    #[test]
    fn identity_key_prefers_path() {
        assert_eq!(series_key("\\\\SRV1\\A", 3), "\\\\SRV1\\A");
        assert_eq!(series_key("", 3), "#3");
    }

    #[test]
    fn sample_time_parses_rfc3339_only() {
        let good = Sample { timestamp: "2024-03-01T12:30:00Z".into(), value: 0.0 };
        assert!(good.time().is_some());
        let bad = Sample { timestamp: "yesterday".into(), value: 0.0 };
        assert!(bad.time().is_none());
    }
}
