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

/// Position of a node in an NFA node sequence.
///
/// Nodes reference each other by position rather than by pointer; a `NodeId` is only
/// meaningful together with the [`Nfa`](super::Nfa) it was taken from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// The node immediately preceding this one in sequence order, if any.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Position of an edge in a [`Diagram`](super::Diagram)'s edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeId;

    #[test]
    fn prev_of_first_node_is_none() {
        assert_eq!(NodeId::new(0).prev(), None);
        assert_eq!(NodeId::new(3).prev(), Some(NodeId::new(2)));
    }

    #[test]
    fn node_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&NodeId::new(7)).expect("serialize");
        assert_eq!(json, "7");

        let id: NodeId = serde_json::from_str("4").expect("deserialize");
        assert_eq!(id.index(), 4);

        serde_json::from_str::<NodeId>("-1").unwrap_err();
    }
}
