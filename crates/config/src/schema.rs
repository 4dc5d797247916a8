use serde::{Deserialize, Serialize};
use tracing::warn;

use vizlet_core::ChangeSet;

/// Root configuration structure parsed from `display.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Drawing canvas shared by all mounted symbols.
    pub canvas: CanvasConfig,
    /// Manifest publishing settings.
    pub manifest: ManifestConfig,
    /// Symbol instances to mount, in display order.
    #[serde(rename = "symbol")]
    pub symbols: Vec<SymbolMount>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            manifest: ManifestConfig::default(),
            symbols: vec![SymbolMount::new("histogram"), SymbolMount::new("label")],
        }
    }
}

/// Canvas geometry applied to every mounted symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// Where the plugin bundle would be served from; used to build the
/// discovery manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub base_url: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self { base_url: "https://localhost:8432".to_string() }
    }
}

/// Config block for a single mounted symbol instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolMount {
    /// Symbol type identifier, e.g. `"histogram"` or `"label"`.
    pub kind: String,
    /// Arbitrary extra options forwarded to the symbol as its initial
    /// change notification.
    #[serde(default, flatten)]
    pub options: toml::Table,
}

impl SymbolMount {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), options: toml::Table::new() }
    }

    /// Interpret the options table as the instance's first change-set.
    ///
    /// Recognised keys: `buckets` (positive integer), `y_axis` (bool),
    /// `color` and `back_color` (hex strings). Anything else is logged
    /// and skipped; a config typo must not take the whole display down.
    pub fn initial_change(&self) -> ChangeSet {
        let mut change = ChangeSet::default();
        for (key, value) in &self.options {
            match key.as_str() {
                "buckets" => match value.as_integer() {
                    Some(n) if n > 0 => change.buckets = Some(n as usize),
                    _ => warn!(kind = %self.kind, %value, "ignoring invalid bucket count"),
                },
                "y_axis" => match value.as_bool() {
                    Some(v) => change.y_axis_visible = Some(v),
                    None => warn!(kind = %self.kind, %value, "ignoring non-boolean y_axis"),
                },
                "color" => match value.as_str() {
                    Some(s) => change.color = Some(s.to_string()),
                    None => warn!(kind = %self.kind, %value, "ignoring non-string color"),
                },
                "back_color" => match value.as_str() {
                    Some(s) => change.back_color = Some(s.to_string()),
                    None => warn!(kind = %self.kind, %value, "ignoring non-string back_color"),
                },
                other => warn!(kind = %self.kind, option = other, "unknown symbol option"),
            }
        }
        change
    }
}
