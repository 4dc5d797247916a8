//! Abstract retained drawing surface for symbol plugins.
//!
//! Symbols never touch a real canvas or DOM. They build and mutate a
//! [`Scene`] — a tree of groups, rectangles, text runs, and axes addressed
//! by stable [`NodeId`] handles — and the embedding host decides how (and
//! whether) to paint it. [`Scene::to_svg`] renders a snapshot for
//! inspection and tests.

pub mod color;
pub mod scene;
pub mod svg;

pub use color::Color;
pub use scene::{Axis, AxisSide, NodeId, NodeKind, Rect, Scene, Text, TextAnchor, Tick};
