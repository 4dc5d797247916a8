//! Retained node tree.
//!
//! A [`Scene`] is the drawing surface a symbol owns for its whole lifetime.
//! Nodes are created under a parent, addressed by [`NodeId`], mutated in
//! place across updates, and removed together with their subtree. Handles
//! are never reused: once a node is removed its id stays dead, so a stale
//! handle can only miss, never alias a newer node.

use crate::color::Color;

/// Stable handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Horizontal alignment of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Which side of a plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Horizontal axis along the bottom edge; ticks grow downward.
    Bottom,
    /// Vertical axis along the left edge; ticks grow leftward.
    Left,
}

/// One tick mark on an axis: pixel offset along the axis line plus label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f32,
    pub label: String,
}

/// Filled rectangle, positioned by its node translate.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

/// Text run, positioned by its node translate.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub anchor: TextAnchor,
    pub size: f32,
    pub color: Color,
}

/// Axis line with tick marks, positioned by its node translate.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub length: f32,
    pub ticks: Vec<Tick>,
}

/// What a node draws. Groups draw nothing themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group,
    Rect(Rect),
    Text(Text),
    Axis(Axis),
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    x: f32,
    y: f32,
    visible: bool,
    class: String,
    kind: NodeKind,
}

/// Retained tree of drawable nodes.
#[derive(Debug)]
pub struct Scene {
    // Tombstone storage: removed slots stay `None` so ids are never reused.
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Scene {
    /// New scene containing only the permanent root group.
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            x: 0.0,
            y: 0.0,
            visible: true,
            class: String::from("root"),
            kind: NodeKind::Group,
        };
        Self { nodes: vec![Some(root)], root: NodeId(0) }
    }

    /// The permanent root group. Never removable.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        false // the root always exists
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Append a group node under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` has been removed.
    pub fn add_group(&mut self, parent: NodeId, class: &str) -> NodeId {
        self.add_node(parent, class, NodeKind::Group)
    }

    /// Append a zero-sized rectangle under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` has been removed.
    pub fn add_rect(&mut self, parent: NodeId, class: &str) -> NodeId {
        self.add_node(
            parent,
            class,
            NodeKind::Rect(Rect { width: 0.0, height: 0.0, fill: Color::BLACK }),
        )
    }

    /// Append an empty text run under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` has been removed.
    pub fn add_text(&mut self, parent: NodeId, class: &str) -> NodeId {
        self.add_node(
            parent,
            class,
            NodeKind::Text(Text {
                content: String::new(),
                anchor: TextAnchor::Start,
                size: 10.0,
                color: Color::BLACK,
            }),
        )
    }

    /// Append a tickless axis under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` has been removed.
    pub fn add_axis(&mut self, parent: NodeId, class: &str, side: AxisSide) -> NodeId {
        self.add_node(
            parent,
            class,
            NodeKind::Axis(Axis { side, length: 0.0, ticks: Vec::new() }),
        )
    }

    /// Remove `id` and its whole subtree. Removing the root or an already
    /// dead id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root || !self.contains(id) {
            return;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            if let Some(p) = self.node_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes[cur.0].take() {
                stack.extend(node.children);
            }
        }
    }

    /// Set the node's translate (position relative to its parent).
    pub fn set_translate(&mut self, id: NodeId, x: f32, y: f32) {
        if let Some(n) = self.node_mut(id) {
            n.x = x;
            n.y = y;
        }
    }

    pub fn translate(&self, id: NodeId) -> Option<(f32, f32)> {
        self.node(id).map(|n| (n.x, n.y))
    }

    /// Show or hide a node. Hidden nodes keep their subtree and state.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(n) = self.node_mut(id) {
            n.visible = visible;
        }
    }

    /// `false` for hidden or dead nodes.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.visible)
    }

    pub fn class(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.class.as_str()).unwrap_or("")
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children in paint order. Empty for leaves and dead ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn rect(&self, id: NodeId) -> Option<&Rect> {
        match self.kind(id) {
            Some(NodeKind::Rect(r)) => Some(r),
            _ => None,
        }
    }

    pub fn rect_mut(&mut self, id: NodeId) -> Option<&mut Rect> {
        match self.node_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Rect(r)) => Some(r),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&Text> {
        match self.kind(id) {
            Some(NodeKind::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, id: NodeId) -> Option<&mut Text> {
        match self.node_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn axis(&self, id: NodeId) -> Option<&Axis> {
        match self.kind(id) {
            Some(NodeKind::Axis(a)) => Some(a),
            _ => None,
        }
    }

    pub fn axis_mut(&mut self, id: NodeId) -> Option<&mut Axis> {
        match self.node_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Axis(a)) => Some(a),
            _ => None,
        }
    }

    /// Depth-first search for the first node under `from` (inclusive) with
    /// the given class.
    pub fn find_by_class(&self, from: NodeId, class: &str) -> Option<NodeId> {
        let mut stack = vec![from];
        while let Some(cur) = stack.pop() {
            let node = self.node(cur)?;
            if node.class == class {
                return Some(cur);
            }
            // push in reverse so the first child is visited first
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn add_node(&mut self, parent: NodeId, class: &str, kind: NodeKind) -> NodeId {
        assert!(self.contains(parent), "parent node was removed");
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            parent: Some(parent),
            children: Vec::new(),
            x: 0.0,
            y: 0.0,
            visible: true,
            class: class.to_string(),
            kind,
        }));
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|n| n.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(|n| n.as_mut())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
