//! The symbols shipped with this SDK, plus their registry wiring.

pub mod histogram;
pub mod label;

pub use histogram::HistogramSymbol;
pub use label::LabelSymbol;

use vizlet_core::{Result, Symbol};
use vizlet_registry::{
    ConfigGroup, ConfigProp, DataParams, DataShape, SymbolRegistry, SymbolSpec, SystemInput,
    DISPLAY_CATEGORY,
};

/// Register every built-in symbol type on `registry`.
pub fn register_builtins(registry: &mut SymbolRegistry) -> Result<()> {
    registry.register(histogram_spec(), new_histogram)?;
    registry.register(label_spec(), new_label)?;
    Ok(())
}

fn new_histogram() -> Box<dyn Symbol> {
    Box::new(HistogramSymbol::new())
}

fn new_label() -> Box<dyn Symbol> {
    Box::new(LabelSymbol::new())
}

/// Declarative spec for the histogram symbol.
pub fn histogram_spec() -> SymbolSpec {
    SymbolSpec {
        name: "histogram".into(),
        display_name: "Histogram".into(),
        thumbnail: "^/assets/images/histogram.svg".into(),
        data_params: DataParams::shaped(DataShape::Timeseries),
        inputs: vec![SystemInput::Data],
        general_config: vec![ConfigGroup {
            name: "Histogram".into(),
            is_expanded: true,
            config_props: vec![
                ConfigProp::num("buckets", "Bucket Count", 10.0, 1.0, 100.0),
                ConfigProp::flag("yAxis", "Show Y Axis", true),
            ],
        }],
        categories: vec![DISPLAY_CATEGORY.into()],
        layout_width: 400,
        layout_height: 300,
    }
}

/// Declarative spec for the label symbol.
pub fn label_spec() -> SymbolSpec {
    SymbolSpec {
        name: "label".into(),
        display_name: "Label".into(),
        thumbnail: "^/assets/images/label.svg".into(),
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
        categories: vec![DISPLAY_CATEGORY.into()],
        layout_width: 200,
        layout_height: 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_register_once() {
        let mut registry = SymbolRegistry::new("vizlet-symbols");
        register_builtins(&mut registry).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(register_builtins(&mut registry).is_err());
    }

    #[test]
    fn registry_creates_working_instances() {
        let mut registry = SymbolRegistry::new("vizlet-symbols");
        register_builtins(&mut registry).unwrap();
        assert_eq!(registry.create("histogram").unwrap().kind(), "histogram");
        assert_eq!(registry.create("label").unwrap().kind(), "label");
    }

    #[test]
    fn specs_match_the_symbols_defaults() {
        let spec = histogram_spec();
        assert_eq!(spec.data_params.shape, DataShape::Timeseries);
        assert_eq!((spec.layout_width, spec.layout_height), (400, 300));
        let buckets = &spec.general_config[0].config_props[0];
        assert_eq!(buckets.prop_name, "buckets");
        assert_eq!(buckets.min, Some(1.0));

        let spec = label_spec();
        assert_eq!(spec.data_params.shape, DataShape::Single);
        assert_eq!((spec.layout_width, spec.layout_height), (200, 100));
    }
}
