// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use super::class::{Anchor, CharClass};
use super::ids::{EdgeId, NodeId};

/// The symbol shown on ε-transitions unless an exporter is configured otherwise.
pub const DEFAULT_EPSILON: &str = "ε";

/// One diagram node per NFA node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramNode {
    id: NodeId,
    label: SmolStr,
    is_start: bool,
    is_done: bool,
}

impl DiagramNode {
    pub fn new(id: NodeId, label: impl Into<SmolStr>) -> Self {
        Self { id, label: label.into(), is_start: false, is_done: false }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub(crate) fn mark_start(&mut self) {
        self.is_start = true;
    }

    pub(crate) fn mark_done(&mut self) {
        self.is_done = true;
    }
}

/// What an edge is labeled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EdgeLabel {
    Epsilon,
    Char(char),
    Anchor(Anchor),
    Class(CharClass),
}

impl EdgeLabel {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// The label text, with `epsilon` standing in for ε-transitions.
    pub fn render<'a>(&self, epsilon: &'a str) -> Cow<'a, str> {
        match self {
            Self::Epsilon => Cow::Borrowed(epsilon),
            Self::Char(c) if c.is_control() => Cow::Owned(c.escape_default().to_string()),
            Self::Char(c) => Cow::Owned(c.to_string()),
            Self::Anchor(anchor) => Cow::Borrowed(anchor.symbol()),
            Self::Class(class) => Cow::Owned(class.to_string()),
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_EPSILON))
    }
}

/// One diagram edge per outgoing NFA transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    label: EdgeLabel,
    is_neighbor: bool,
}

impl DiagramEdge {
    /// `is_neighbor` is derived: the edge points at the node right before its source.
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, label: EdgeLabel) -> Self {
        let is_neighbor = from.prev() == Some(to);
        Self { id, from, to, label, is_neighbor }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }

    /// Neighbor edges are drawn straight, all others curved.
    pub fn is_neighbor(&self) -> bool {
        self.is_neighbor
    }
}

/// Presentation-only ordering between a node and the one before it in the sequence.
///
/// Renderers use this to place nodes left to right; it is unrelated to the automaton's
/// transitions and never carries a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutOrder {
    pub node: NodeId,
    pub prev: NodeId,
}

/// Renderer-agnostic description of an NFA.
///
/// Nodes, edges and layout-order records are each kept in ascending source-index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    start: NodeId,
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
    layout_order: Vec<LayoutOrder>,
}

impl Diagram {
    pub(crate) fn with_capacity(start: NodeId, nodes: usize, edges: usize) -> Self {
        Self {
            start,
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            layout_order: Vec::with_capacity(nodes.saturating_sub(1)),
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn layout_order(&self) -> &[LayoutOrder] {
        &self.layout_order
    }

    pub fn node(&self, id: NodeId) -> Option<&DiagramNode> {
        self.nodes.get(id.index())
    }

    pub fn start_nodes(&self) -> impl Iterator<Item = &DiagramNode> + '_ {
        self.nodes.iter().filter(|node| node.is_start())
    }

    pub fn done_nodes(&self) -> impl Iterator<Item = &DiagramNode> + '_ {
        self.nodes.iter().filter(|node| node.is_done())
    }

    /// Edges leaving `id`, in emission order.
    pub fn edges_from(&self, id: NodeId) -> &[DiagramEdge] {
        let lo = self.edges.partition_point(|edge| edge.from() < id);
        let hi = self.edges.partition_point(|edge| edge.from() <= id);
        &self.edges[lo..hi]
    }

    pub(crate) fn push_node(&mut self, node: DiagramNode) {
        self.nodes.push(node);
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut DiagramNode> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn push_layout_order(&mut self, order: LayoutOrder) {
        self.layout_order.push(order);
    }

    pub(crate) fn push_edge(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(DiagramEdge::new(id, from, to, label));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DiagramEdge, EdgeLabel};
    use crate::model::{Anchor, CharClass, ClassItem, EdgeId, NodeId};

    #[test]
    fn neighbor_flag_is_derived_from_positions() {
        let edge = |from, to| {
            DiagramEdge::new(EdgeId::new(0), NodeId::new(from), NodeId::new(to), EdgeLabel::Epsilon)
        };
        assert!(edge(4, 3).is_neighbor());
        assert!(!edge(4, 2).is_neighbor());
        assert!(!edge(3, 4).is_neighbor());
        assert!(!edge(0, 0).is_neighbor());
        assert!(!edge(2, 2).is_neighbor());
    }

    #[test]
    fn labels_render_with_custom_epsilon() {
        assert_eq!(EdgeLabel::Epsilon.render("eps"), "eps");
        assert_eq!(EdgeLabel::Epsilon.to_string(), "ε");
        assert_eq!(EdgeLabel::Char('"').to_string(), "\"");
        assert_eq!(EdgeLabel::Char('\n').to_string(), r"\n");
        assert_eq!(EdgeLabel::Anchor(Anchor::Start).render("eps"), "^");
    }

    #[rstest]
    #[case('\0', r"\u{0}")]
    #[case('\x1b', r"\u{1b}")]
    #[case('\x7f', r"\u{7f}")]
    #[case('\u{85}', r"\u{85}")]
    #[case('\t', r"\t")]
    #[case('é', "é")]
    fn control_chars_are_escaped_in_labels(#[case] c: char, #[case] expected: &str) {
        assert_eq!(EdgeLabel::Char(c).to_string(), expected);
        let class = CharClass::new(false, vec![ClassItem::Char(c)]);
        assert_eq!(EdgeLabel::Class(class).to_string(), format!("[{expected}]"));
    }
}
