//! Declarative symbol metadata.
//!
//! A [`SymbolSpec`] tells the host everything it needs to know about a
//! symbol before instantiating one: what to call it, what data shape to
//! query, which system inputs to wire up, and which configuration
//! properties to render UI for. Specs are pure data and serialize with the
//! camelCase field names the host expects; constructors are registered
//! separately.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version of the extensibility contract spoken by this crate.
pub const EXT_VERSION: u32 = 1;

/// Category every symbol falls into unless it says otherwise.
pub const DISPLAY_CATEGORY: &str = "display";

/// Data shape a symbol requests from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataShape {
    /// One current value per stream.
    Single,
    /// Several streams, one current value each.
    Multiple,
    /// Several streams with a window of timestamped events each.
    Timeseries,
}

/// Parameters controlling how the host queries data for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataParams {
    pub shape: DataShape,
    /// Summary columns, e.g. `["Average", "Total"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Data mode, e.g. `"snapshot"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_mode: Option<String>,
}

impl DataParams {
    pub fn shaped(shape: DataShape) -> Self {
        Self { shape, columns: None, data_mode: None }
    }
}

/// System-level inputs a symbol can ask the host to deliver.
///
/// Each variant maps to one host-side input channel; a symbol declares the
/// ones it reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemInput {
    /// Summary columns requested for the data query.
    Columns,
    /// Cursor timestamp while the user drags a cursor over the symbol.
    CursorTime,
    /// The real-time data stream.
    Data,
    /// Data mode, e.g. snapshot.
    DataMode,
    /// Whether the display is being edited.
    EditMode,
    /// Index of the zone selected in the configuration UI.
    ZoneIndex,
    /// Indices of the highlighted data items.
    HighlightIndices,
    /// Markup text of a graphic-style symbol.
    Markup,
    /// URL prefix for bundled assets such as images.
    PathPrefix,
    /// The symbol's own data shape.
    Shape,
    /// The symbol's own type name.
    Type,
    /// Configured zone properties before multi-state evaluation.
    Zones,
    /// Whether a zone is currently highlighted.
    HighlightZone,
    /// Whether the symbol is currently selected.
    Selected,
    /// Multi-state enabled properties with their current values.
    MSData,
    /// Zone property configurations grouped by zone index.
    ZonePropConfigs,
}

/// Kind of UI control a configuration property renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigPropKind {
    Color,
    Num,
    Text,
    Flag,
    Url,
    DocumentUrl,
    Columns,
    TextAlign,
    Datasource,
    Custom,
}

/// One host-rendered configuration property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProp {
    pub prop_name: String,
    /// Name shown in the configuration UI.
    pub display_name: String,
    pub config_type: ConfigPropKind,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default_val: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl ConfigProp {
    pub fn color(prop_name: &str, display_name: &str, default: &str) -> Self {
        Self {
            prop_name: prop_name.to_string(),
            display_name: display_name.to_string(),
            config_type: ConfigPropKind::Color,
            default_val: Value::from(default),
            min: None,
            max: None,
            required: None,
        }
    }

    pub fn num(prop_name: &str, display_name: &str, default: f64, min: f64, max: f64) -> Self {
        Self {
            prop_name: prop_name.to_string(),
            display_name: display_name.to_string(),
            config_type: ConfigPropKind::Num,
            default_val: Value::from(default),
            min: Some(min),
            max: Some(max),
            required: None,
        }
    }

    pub fn flag(prop_name: &str, display_name: &str, default: bool) -> Self {
        Self {
            prop_name: prop_name.to_string(),
            display_name: display_name.to_string(),
            config_type: ConfigPropKind::Flag,
            default_val: Value::from(default),
            min: None,
            max: None,
            required: None,
        }
    }

    pub fn text(prop_name: &str, display_name: &str, default: &str) -> Self {
        Self {
            prop_name: prop_name.to_string(),
            display_name: display_name.to_string(),
            config_type: ConfigPropKind::Text,
            default_val: Value::from(default),
            min: None,
            max: None,
            required: None,
        }
    }
}

/// Collapsible group of configuration properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGroup {
    pub name: String,
    pub is_expanded: bool,
    pub config_props: Vec<ConfigProp>,
}

/// Declarative manifest entry for one symbol type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSpec {
    /// Internal name, unique within a registry.
    pub name: String,
    /// Name shown to end users.
    pub display_name: String,
    /// Thumbnail asset path, e.g. `^/assets/images/histogram.svg`.
    pub thumbnail: String,
    pub data_params: DataParams,
    /// System inputs the symbol reacts to.
    #[serde(default)]
    pub inputs: Vec<SystemInput>,
    /// Configuration property groups rendered by the host.
    #[serde(default)]
    pub general_config: Vec<ConfigGroup>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Initial width in logical pixels.
    pub layout_width: u32,
    /// Initial height in logical pixels.
    pub layout_height: u32,
}

fn default_categories() -> Vec<String> {
    vec![DISPLAY_CATEGORY.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_spec() -> SymbolSpec {
        SymbolSpec {
            name: "example-symbol".into(),
            display_name: "Example Plug-in Symbol".into(),
            thumbnail: "^/assets/images/example.svg".into(),
            data_params: DataParams::shaped(DataShape::Single),
            inputs: vec![SystemInput::Data, SystemInput::PathPrefix],
            general_config: vec![ConfigGroup {
                name: "General".into(),
                is_expanded: true,
                config_props: vec![
                    ConfigProp::color("bkColor", "Background color", "#ffffff"),
                    ConfigProp::color("fgColor", "Color", "#000000"),
                ],
            }],
            categories: default_categories(),
            layout_width: 200,
            layout_height: 100,
        }
    }

    #[test]
    fn serializes_with_host_field_names() {
        let value = serde_json::to_value(sample_spec()).unwrap();
        assert_eq!(value["displayName"], "Example Plug-in Symbol");
        assert_eq!(value["dataParams"]["shape"], "single");
        assert_eq!(value["inputs"], json!(["Data", "PathPrefix"]));
        assert_eq!(value["generalConfig"][0]["isExpanded"], json!(true));
        assert_eq!(
            value["generalConfig"][0]["configProps"][0],
            json!({
                "propName": "bkColor",
                "displayName": "Background color",
                "configType": "Color",
                "defaultVal": "#ffffff"
            })
        );
        assert_eq!(value["layoutWidth"], 200);
        assert_eq!(value["categories"], json!(["display"]));
    }

    #[test]
    fn num_props_carry_their_bounds() {
        let prop = ConfigProp::num("bins", "Bucket Count", 10.0, 1.0, 100.0);
        let value = serde_json::to_value(prop).unwrap();
        assert_eq!(value["min"], json!(1.0));
        assert_eq!(value["max"], json!(100.0));
        assert_eq!(value["defaultVal"], json!(10.0));
    }

    #[test]
    fn specs_round_trip() {
        let spec = sample_spec();
        let json = serde_json::to_string(&spec).unwrap();
        let back: SymbolSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
