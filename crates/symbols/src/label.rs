//! Text label symbol.
//!
//! Shows one row per data stream: the stream path on the left, the current
//! value on the right, over a configurable background. Works with
//! single-shape data; enumeration values display by their name, and a
//! parseable timestamp is appended as a time-of-day suffix.

use chrono::DateTime;
use tracing::warn;

use vizlet_core::{series_key, ChangeSet, DataEnvelope, Series, Symbol};
use vizlet_surface::{Color, NodeId, Scene, TextAnchor};

const DEFAULT_WIDTH: f32 = 200.0;
const DEFAULT_HEIGHT: f32 = 100.0;
const PAD: f32 = 8.0;
const ROW_HEIGHT: f32 = 18.0;
const FONT_SIZE: f32 = 12.0;
/// Text baseline offset from the top of a row.
const BASELINE: f32 = ROW_HEIGHT - 4.0;

/// Formatted content for one display row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowContent {
    pub key: String,
    pub path: String,
    pub value: String,
}

/// Retained nodes for one display row.
#[derive(Debug)]
struct Row {
    key: String,
    group: NodeId,
    path_text: NodeId,
    value_text: NodeId,
}

#[derive(Debug)]
pub struct LabelSymbol {
    fg: Color,
    bk: Color,
    width: f32,
    height: f32,
    scene: Scene,
    background: NodeId,
    rows_group: NodeId,
    rows: Vec<Row>,
}

impl LabelSymbol {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        let canvas = scene.add_group(scene.root(), "label");
        let background = scene.add_rect(canvas, "background");
        let rows_group = scene.add_group(canvas, "rows");

        let mut symbol = Self {
            fg: Color::BLACK,
            bk: Color::WHITE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scene,
            background,
            rows_group,
            rows: Vec::new(),
        };
        symbol.apply_background();
        symbol
    }

    /// Format a payload into display rows. Missing or empty data formats
    /// to no rows at all.
    pub fn format_rows(data: &DataEnvelope) -> Vec<RowContent> {
        data.body
            .iter()
            .enumerate()
            .map(|(index, series)| RowContent {
                key: series_key(&series.path, index),
                path: series.path.clone(),
                value: format_value(series),
            })
            .collect()
    }

    fn apply_background(&mut self) {
        if let Some(rect) = self.scene.rect_mut(self.background) {
            rect.width = self.width;
            rect.height = self.height;
            rect.fill = self.bk;
        }
    }

    fn set_color(&mut self, hex: &str) {
        match Color::from_hex(hex) {
            Some(color) => {
                self.fg = color;
                for row in &self.rows {
                    for id in [row.path_text, row.value_text] {
                        if let Some(text) = self.scene.text_mut(id) {
                            text.color = color;
                        }
                    }
                }
            }
            None => warn!(value = hex, "ignoring unparseable foreground colour"),
        }
    }

    fn set_back_color(&mut self, hex: &str) {
        match Color::from_hex(hex) {
            Some(color) => {
                self.bk = color;
                self.apply_background();
            }
            None => warn!(value = hex, "ignoring unparseable background colour"),
        }
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.apply_background();
        // value column hugs the right edge
        for row in &self.rows {
            self.scene.set_translate(row.value_text, self.width - PAD, BASELINE);
        }
    }

    fn set_data(&mut self, data: &DataEnvelope) {
        let contents = Self::format_rows(data);

        let mut old = std::mem::take(&mut self.rows);
        let mut next = Vec::with_capacity(contents.len());

        for (index, content) in contents.iter().enumerate() {
            let row = match old.iter().position(|r| r.key == content.key) {
                Some(pos) => old.swap_remove(pos),
                None => self.create_row(&content.key),
            };
            self.scene.set_translate(row.group, 0.0, PAD + index as f32 * ROW_HEIGHT);
            if let Some(text) = self.scene.text_mut(row.path_text) {
                if text.content != content.path {
                    text.content = content.path.clone();
                }
            }
            if let Some(text) = self.scene.text_mut(row.value_text) {
                text.content = content.value.clone();
            }
            next.push(row);
        }

        for row in old {
            self.scene.remove(row.group);
        }
        self.rows = next;
    }

    fn create_row(&mut self, key: &str) -> Row {
        let group = self.scene.add_group(self.rows_group, "row");
        let path_text = self.scene.add_text(group, "path");
        let value_text = self.scene.add_text(group, "value");
        self.scene.set_translate(path_text, PAD, BASELINE);
        self.scene.set_translate(value_text, self.width - PAD, BASELINE);
        for id in [path_text, value_text] {
            if let Some(text) = self.scene.text_mut(id) {
                text.size = FONT_SIZE;
                text.color = self.fg;
            }
        }
        if let Some(text) = self.scene.text_mut(value_text) {
            text.anchor = TextAnchor::End;
        }
        Row { key: key.to_string(), group, path_text, value_text }
    }
}

impl Default for LabelSymbol {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbol for LabelSymbol {
    fn kind(&self) -> &'static str {
        "label"
    }

    fn apply_change(&mut self, change: &ChangeSet) {
        if let Some(hex) = &change.color {
            self.set_color(hex);
        }
        if let Some(hex) = &change.back_color {
            self.set_back_color(hex);
        }
        if let Some((width, height)) = change.size {
            self.set_size(width, height);
        }
        if let Some(data) = &change.data {
            self.set_data(data);
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

fn format_value(series: &Series) -> String {
    let mut out = series.value.as_ref().map(|v| v.display()).unwrap_or_default();
    if let Some(ts) = &series.timestamp {
        if let Ok(time) = DateTime::parse_from_rfc3339(ts) {
            out.push_str(&format!(" @ {}", time.format("%H:%M:%S")));
        }
    }
    out
}
