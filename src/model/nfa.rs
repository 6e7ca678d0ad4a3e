// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::class::{Anchor, CharClass};
use super::ids::NodeId;

/// One node of a compiled NFA.
///
/// Every variant except `Done` and `Fail` carries the position(s) of its successor(s) in the
/// owning [`Nfa`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Done,
    Fail,
    Save {
        slot: usize,
        next: NodeId,
    },
    Char {
        #[serde(rename = "char")]
        c: char,
        next: NodeId,
    },
    Epsilon {
        next: NodeId,
    },
    Split {
        next1: NodeId,
        next2: NodeId,
    },
    Anchor {
        anchor: Anchor,
        next: NodeId,
    },
    Sparse {
        class: CharClass,
        next: NodeId,
    },
}

/// Which field of a node holds a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Next,
    Next1,
    Next2,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Next => "next",
            Self::Next1 => "next1",
            Self::Next2 => "next2",
        })
    }
}

impl Node {
    /// The node's outgoing references, in transition order (`next1` before `next2`).
    pub fn references(&self) -> SmallVec<[(Reference, NodeId); 2]> {
        let mut refs = SmallVec::new();
        match *self {
            Self::Done | Self::Fail => {}
            Self::Save { next, .. }
            | Self::Char { next, .. }
            | Self::Epsilon { next }
            | Self::Anchor { next, .. }
            | Self::Sparse { next, .. } => refs.push((Reference::Next, next)),
            Self::Split { next1, next2 } => {
                refs.push((Reference::Next1, next1));
                refs.push((Reference::Next2, next2));
            }
        }
        refs
    }

    pub fn targets(&self) -> SmallVec<[NodeId; 2]> {
        self.references().into_iter().map(|(_, target)| target).collect()
    }

    pub fn transition_count(&self) -> usize {
        match self {
            Self::Done | Self::Fail => 0,
            Self::Split { .. } => 2,
            _ => 1,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Short human-readable description of the variant and its payload.
    pub fn summary(&self) -> String {
        match self {
            Self::Done => "done".to_owned(),
            Self::Fail => "fail".to_owned(),
            Self::Save { slot, next } => format!("save {slot} {next}"),
            Self::Char { c, next } => format!("char {c:?} {next}"),
            Self::Epsilon { next } => format!("epsilon {next}"),
            Self::Split { next1, next2 } => format!("split {next1} {next2}"),
            Self::Anchor { next, .. } => format!("anchor {next}"),
            Self::Sparse { next, .. } => format!("sparse {next}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NfaError {
    #[error("start index {start} is out of range for an NFA with {len} nodes")]
    StartOutOfRange { start: NodeId, len: usize },
    #[error("node {node} references {field} = {target}, which is out of range for an NFA with {len} nodes")]
    DanglingReference {
        node: NodeId,
        field: Reference,
        target: NodeId,
        len: usize,
    },
}

/// A compiled NFA: an ordered node sequence plus the designated start node.
///
/// The constructor does not validate references; producers are expected to hand over
/// well-formed automata and consumers call [`Nfa::validate`] before relying on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Nfa {
    start: NodeId,
    nodes: Vec<Node>,
}

impl Nfa {
    pub fn new(nodes: Vec<Node>, start: NodeId) -> Self {
        Self { start, nodes }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Iterates `(id, node)` pairs in sequence order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(index, node)| (NodeId::new(index), node))
    }

    /// Sum of outgoing transitions over all nodes.
    pub fn transition_count(&self) -> usize {
        self.nodes.iter().map(Node::transition_count).sum()
    }

    /// Checks the start index and every node reference against the node count, reporting the
    /// first offending reference in sequence order.
    pub fn validate(&self) -> Result<(), NfaError> {
        let len = self.nodes.len();
        if self.start.index() >= len {
            return Err(NfaError::StartOutOfRange { start: self.start, len });
        }
        for (node, n) in self.iter() {
            for (field, target) in n.references() {
                if target.index() >= len {
                    return Err(NfaError::DanglingReference { node, field, target, len });
                }
            }
        }
        Ok(())
    }
}
