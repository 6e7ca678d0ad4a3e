// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! NFA → diagram translation.
//!
//! [`translate`] walks the node sequence once and appends structured records (nodes,
//! layout order, edges) to a [`Diagram`]. Exporters in [`crate::format`] serialize the
//! result for a particular renderer.

use crate::model::{Diagram, DiagramNode, EdgeLabel, LayoutOrder, Nfa, NfaError, Node, NodeId};


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("malformed NFA: {0}")]
    Malformed(#[from] NfaError),
}

/// Translates `nfa` into a diagram description.
///
/// The automaton is validated up front, so a dangling reference or an out-of-range start
/// index fails the whole translation instead of producing a partial diagram.
pub fn translate(nfa: &Nfa) -> Result<Diagram, TranslateError> {
    nfa.validate()?;

    let mut builder = DiagramBuilder::new(nfa);
    builder.nodes();
    builder.start();
    builder.transitions();
    let diagram = builder.finish();

    tracing::debug!(
        nodes = diagram.nodes().len(),
        edges = diagram.edges().len(),
        start = %diagram.start(),
        "translated nfa"
    );
    Ok(diagram)
}

struct DiagramBuilder<'a> {
    nfa: &'a Nfa,
    diagram: Diagram,
}

impl<'a> DiagramBuilder<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            diagram: Diagram::with_capacity(nfa.start(), nfa.len(), nfa.transition_count()),
        }
    }

    /// One node record per NFA node, each followed by its layout-order record.
    fn nodes(&mut self) {
        for (id, node) in self.nfa.iter() {
            let mut record = DiagramNode::new(id, node.summary());
            if node.is_done() {
                record.mark_done();
            }
            self.diagram.push_node(record);

            if let Some(prev) = id.prev() {
                self.diagram.push_layout_order(LayoutOrder { node: id, prev });
            }
        }
    }

    fn start(&mut self) {
        if let Some(start) = self.diagram.node_mut(self.nfa.start()) {
            start.mark_start();
        }
    }

    fn transitions(&mut self) {
        for (id, node) in self.nfa.iter() {
            match node {
                Node::Done | Node::Fail => {}
                Node::Save { next, .. } | Node::Epsilon { next } => {
                    self.edge(id, *next, EdgeLabel::Epsilon);
                }
                Node::Char { c, next } => self.edge(id, *next, EdgeLabel::Char(*c)),
                Node::Split { next1, next2 } => {
                    self.edge(id, *next1, EdgeLabel::Epsilon);
                    self.edge(id, *next2, EdgeLabel::Epsilon);
                }
                Node::Anchor { anchor, next } => self.edge(id, *next, EdgeLabel::Anchor(*anchor)),
                Node::Sparse { class, next } => {
                    self.edge(id, *next, EdgeLabel::Class(class.clone()));
                }
            }
        }
    }

    fn edge(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) {
        self.diagram.push_edge(from, to, label);
    }

    fn finish(self) -> Diagram {
        self.diagram
    }
}
