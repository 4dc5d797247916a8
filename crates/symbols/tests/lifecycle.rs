//! Drives the shipped symbols the way a host would: create through the
//! registry, configure, push JSON payloads, resize, and inspect the
//! retained scene between notifications.

use vizlet_core::{ChangeSet, DataEnvelope, Symbol};
use vizlet_registry::SymbolRegistry;
use vizlet_symbols::register_builtins;

fn registry() -> SymbolRegistry {
    let mut registry = SymbolRegistry::new("vizlet-symbols");
    register_builtins(&mut registry).unwrap();
    registry
}

fn parse(json: &str) -> DataEnvelope {
    serde_json::from_str(json).unwrap()
}

fn two_stream_payload() -> DataEnvelope {
    parse(
        r##"{
            "body": [
                {
                    "color": "#4682b4",
                    "path": "\\\\SRV1\\Plant\\Flow Rate",
                    "step": 0,
                    "events": [
                        {"timestamp": "2024-03-01T00:00:00Z", "value": 1.0},
                        {"timestamp": "2024-03-01T00:01:00Z", "value": 2.0},
                        {"timestamp": "2024-03-01T00:02:00Z", "value": 9.0},
                        {"timestamp": "2024-03-01T00:03:00Z", "value": 10.0}
                    ]
                },
                {
                    "color": "#ff7f0e",
                    "path": "\\\\SRV1\\Plant\\Pressure",
                    "step": 0,
                    "events": [
                        {"timestamp": "2024-03-01T00:00:00Z", "value": 5.0}
                    ]
                }
            ]
        }"##,
    )
}

fn bar_heights(symbol: &dyn Symbol, subplot_title: &str) -> Vec<f32> {
    let scene = symbol.scene();
    let mut cursor = scene.root();
    // walk: the sub-plot whose title matches, then its bars group
    let canvas = scene.find_by_class(cursor, "histogram").unwrap();
    for &group in scene.children(canvas) {
        let title = scene.find_by_class(group, "title").unwrap();
        if scene.text(title).unwrap().content == subplot_title {
            cursor = scene.find_by_class(group, "bars").unwrap();
            return scene
                .children(cursor)
                .iter()
                .map(|&id| scene.rect(id).unwrap().height)
                .collect();
        }
    }
    panic!("no sub-plot titled {subplot_title}");
}

#[test]
fn host_session_against_the_histogram() {
    let registry = registry();
    let mut symbol = registry.create("histogram").unwrap();

    // configure before any data arrives
    symbol.apply_change(&ChangeSet::buckets(2));

    // first payload: two streams, two sub-plots
    symbol.apply_change(&ChangeSet::data(two_stream_payload()));
    let scene = symbol.scene();
    let canvas = scene.find_by_class(scene.root(), "histogram").unwrap();
    assert_eq!(scene.children(canvas).len(), 2);

    // [1, 2, 9, 10] over two buckets puts two samples in each, so both
    // bars are equally tall and taller than zero
    let heights = bar_heights(symbol.as_ref(), "Flow Rate");
    assert_eq!(heights.len(), 2);
    assert!(heights[0] > 0.0);
    assert_eq!(heights[0], heights[1]);
}

#[test]
fn series_removal_drops_only_that_subplot() {
    let registry = registry();
    let mut symbol = registry.create("histogram").unwrap();
    symbol.apply_change(&ChangeSet::data(two_stream_payload()));

    let scene = symbol.scene();
    let canvas = scene.find_by_class(scene.root(), "histogram").unwrap();
    let groups: Vec<_> = scene.children(canvas).to_vec();
    assert_eq!(groups.len(), 2);

    // second payload drops the pressure stream
    symbol.apply_change(&ChangeSet::data(parse(
        r##"{
            "body": [{
                "color": "#4682b4",
                "path": "\\\\SRV1\\Plant\\Flow Rate",
                "step": 0,
                "events": [{"timestamp": "2024-03-01T00:04:00Z", "value": 3.0}]
            }]
        }"##,
    )));

    let scene = symbol.scene();
    assert_eq!(scene.children(canvas).len(), 1);
    // the surviving sub-plot kept its node, the other is gone
    assert_eq!(scene.children(canvas)[0], groups[0]);
    assert!(!scene.contains(groups[1]));
}

#[test]
fn axis_toggle_and_resize_between_payloads() {
    let registry = registry();
    let mut symbol = registry.create("histogram").unwrap();
    symbol.apply_change(&ChangeSet::data(two_stream_payload()));

    symbol.apply_change(&ChangeSet::y_axis(false));
    let scene = symbol.scene();
    let y_axis = scene.find_by_class(scene.root(), "y-axis").unwrap();
    assert!(!scene.is_visible(y_axis));

    symbol.apply_change(&ChangeSet::resize(800.0, 400.0));
    assert_eq!(symbol.size(), (800.0, 400.0));
    // the toggle survives a resize
    assert!(!symbol.scene().is_visible(y_axis));
}

#[test]
fn malformed_payloads_degrade_to_no_content() {
    let registry = registry();
    let mut symbol = registry.create("histogram").unwrap();

    // an envelope without a body deserializes to the empty state
    symbol.apply_change(&ChangeSet::data(parse("{}")));
    let scene = symbol.scene();
    let canvas = scene.find_by_class(scene.root(), "histogram").unwrap();
    assert!(scene.children(canvas).is_empty());

    // and so does a stream set with no events
    symbol.apply_change(&ChangeSet::data(parse(
        r#"{"body": [{"path": "\\\\SRV1\\A", "events": []}]}"#,
    )));
    assert_eq!(symbol.scene().children(canvas).len(), 1);
}

#[test]
fn label_session_through_the_trait_object() {
    let registry = registry();
    let mut symbol = registry.create("label").unwrap();

    symbol.apply_change(&ChangeSet::data(parse(
        r#"{
            "body": [
                {"path": "\\\\SRV1\\Pump\\Status", "value": {"Name": "Active", "Value": 1}},
                {"path": "\\\\SRV1\\Pump\\Speed", "value": 1480.5}
            ]
        }"#,
    )));

    let scene = symbol.scene();
    let rows = scene.find_by_class(scene.root(), "rows").unwrap();
    assert_eq!(scene.children(rows).len(), 2);

    let first_value = scene.find_by_class(scene.children(rows)[0], "value").unwrap();
    assert_eq!(scene.text(first_value).unwrap().content, "Active");
    let second_value = scene.find_by_class(scene.children(rows)[1], "value").unwrap();
    assert_eq!(scene.text(second_value).unwrap().content, "1480.5");
}

#[test]
fn scenes_export_to_svg_snapshots() {
    let registry = registry();
    let mut symbol = registry.create("histogram").unwrap();
    symbol.apply_change(&ChangeSet::data(two_stream_payload()));

    let (width, height) = symbol.size();
    let svg = symbol.scene().to_svg(width, height);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("class=\"histogram\""));
    assert!(svg.contains(">Flow Rate</text>"));
    assert!(svg.contains("fill=\"#4682b4\""));
}
