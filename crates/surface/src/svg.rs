//! SVG serialization of a [`Scene`].
//!
//! Presentation only: the exporter walks the retained tree and writes one
//! element per node, so a snapshot shows exactly what a host compositor
//! would be handed. Hidden nodes are emitted with `visibility="hidden"`
//! rather than skipped, which keeps toggles observable in snapshots.

use std::fmt::Write;

use crate::scene::{AxisSide, NodeId, NodeKind, Scene, TextAnchor};

impl Scene {
    /// Serialize the whole tree to a standalone SVG document.
    pub fn to_svg(&self, width: f32, height: f32) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">"
        );
        for child in self.children(self.root()) {
            self.write_node(*child, 1, &mut out);
        }
        out.push_str("</svg>\n");
        out
    }

    fn write_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(kind) = self.kind(id) else { return };
        let (x, y) = self.translate(id).unwrap_or((0.0, 0.0));
        let pad = "  ".repeat(depth);
        let mut attrs = String::new();
        let class = self.class(id);
        if !class.is_empty() {
            let _ = write!(attrs, " class=\"{}\"", escape(class));
        }
        if !self.is_visible(id) {
            attrs.push_str(" visibility=\"hidden\"");
        }

        match kind {
            NodeKind::Group => {
                if x != 0.0 || y != 0.0 {
                    let _ = write!(attrs, " transform=\"translate({x},{y})\"");
                }
                let _ = writeln!(out, "{pad}<g{attrs}>");
                for child in self.children(id) {
                    self.write_node(*child, depth + 1, out);
                }
                let _ = writeln!(out, "{pad}</g>");
            }
            NodeKind::Rect(r) => {
                let _ = writeln!(
                    out,
                    "{pad}<rect{attrs} x=\"{x}\" y=\"{y}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                    r.width,
                    r.height,
                    r.fill.to_css()
                );
            }
            NodeKind::Text(t) => {
                let anchor = match t.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    "{pad}<text{attrs} x=\"{x}\" y=\"{y}\" text-anchor=\"{anchor}\" \
                     font-size=\"{}\" fill=\"{}\">{}</text>",
                    t.size,
                    t.color.to_css(),
                    escape(&t.content)
                );
            }
            NodeKind::Axis(a) => {
                if x != 0.0 || y != 0.0 {
                    let _ = write!(attrs, " transform=\"translate({x},{y})\"");
                }
                let _ = writeln!(out, "{pad}<g{attrs}>");
                let inner = "  ".repeat(depth + 1);
                match a.side {
                    AxisSide::Bottom => {
                        let _ = writeln!(
                            out,
                            "{inner}<line x1=\"0\" y1=\"0\" x2=\"{}\" y2=\"0\" stroke=\"#000\"/>",
                            a.length
                        );
                        for tick in &a.ticks {
                            let _ = writeln!(
                                out,
                                "{inner}<line x1=\"{o}\" y1=\"0\" x2=\"{o}\" y2=\"6\" stroke=\"#000\"/>",
                                o = tick.offset
                            );
                            let _ = writeln!(
                                out,
                                "{inner}<text x=\"{}\" y=\"18\" text-anchor=\"middle\" \
                                 font-size=\"10\">{}</text>",
                                tick.offset,
                                escape(&tick.label)
                            );
                        }
                    }
                    AxisSide::Left => {
                        let _ = writeln!(
                            out,
                            "{inner}<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{}\" stroke=\"#000\"/>",
                            a.length
                        );
                        for tick in &a.ticks {
                            let _ = writeln!(
                                out,
                                "{inner}<line x1=\"-6\" y1=\"{o}\" x2=\"0\" y2=\"{o}\" stroke=\"#000\"/>",
                                o = tick.offset
                            );
                            let _ = writeln!(
                                out,
                                "{inner}<text x=\"-9\" y=\"{}\" text-anchor=\"end\" \
                                 font-size=\"10\">{}</text>",
                                tick.offset + 3.0,
                                escape(&tick.label)
                            );
                        }
                    }
                }
                let _ = writeln!(out, "{pad}</g>");
            }
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::Tick;

    #[test]
    fn exports_groups_rects_and_text() {
        let mut scene = Scene::new();
        let plot = scene.add_group(scene.root(), "plot");
        scene.set_translate(plot, 30.0, 30.0);
        let bar = scene.add_rect(plot, "bar");
        scene.set_translate(bar, 4.0, 10.0);
        if let Some(r) = scene.rect_mut(bar) {
            r.width = 16.0;
            r.height = 90.0;
            r.fill = Color::STEEL_BLUE;
        }
        let title = scene.add_text(plot, "title");
        scene.text_mut(title).unwrap().content = "OSIDemo".into();

        let svg = scene.to_svg(400.0, 300.0);
        assert!(svg.contains("viewBox=\"0 0 400 300\""));
        assert!(svg.contains("<g class=\"plot\" transform=\"translate(30,30)\">"));
        assert!(svg.contains("width=\"16\" height=\"90\" fill=\"#4682b4\""));
        assert!(svg.contains(">OSIDemo</text>"));
    }

    #[test]
    fn hidden_nodes_keep_their_element() {
        let mut scene = Scene::new();
        let axis = scene.add_axis(scene.root(), "y-axis", AxisSide::Left);
        scene.set_visible(axis, false);
        let svg = scene.to_svg(100.0, 100.0);
        assert!(svg.contains("class=\"y-axis\" visibility=\"hidden\""));
    }

    #[test]
    fn escapes_markup_in_text() {
        let mut scene = Scene::new();
        let t = scene.add_text(scene.root(), "t");
        scene.text_mut(t).unwrap().content = "a<b&c>".into();
        let svg = scene.to_svg(10.0, 10.0);
        assert!(svg.contains(">a&lt;b&amp;c&gt;</text>"));
    }

    #[test]
    fn axis_ticks_are_drawn() {
        let mut scene = Scene::new();
        let axis = scene.add_axis(scene.root(), "x-axis", AxisSide::Bottom);
        {
            let a = scene.axis_mut(axis).unwrap();
            a.length = 100.0;
            a.ticks.push(Tick { offset: 0.0, label: "0".into() });
            a.ticks.push(Tick { offset: 50.0, label: "5".into() });
        }
        let svg = scene.to_svg(100.0, 40.0);
        assert!(svg.contains("x2=\"100\""));
        assert!(svg.contains(">5</text>"));
    }
}
