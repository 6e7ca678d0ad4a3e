// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An [`Nfa`] is an ordered node sequence with a start index; a [`Diagram`] is the
//! renderer-agnostic description derived from it.

pub mod class;
pub mod diagram;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod nfa;
mod sim;

pub use class::{Anchor, CharClass, ClassItem, PerlClass};
pub use diagram::{Diagram, DiagramEdge, DiagramNode, EdgeLabel, LayoutOrder, DEFAULT_EPSILON};
pub use ids::{EdgeId, NodeId};
pub use nfa::{Nfa, NfaError, Node, Reference};
