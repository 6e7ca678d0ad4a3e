// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Penrose export.
//!
//! The Substance program declares nodes (with their layout order), the start marker, and then
//! per node its label, done marker, and outgoing edges. Edges use `MakeNeighborEdge` when they
//! point at the preceding node and `MakeEdge` otherwise, so the Style can draw the former
//! straight and the latter curved.

use serde::Serialize;

use super::ident::{push_ident, push_quoted};
use super::ExportOptions;
use crate::model::{Diagram, NodeId};

/// Domain program matching the Substance emitted by [`export_substance`].
pub const DOMAIN: &str = include_str!("../../assets/nfa.domain");

/// Style program that lays nodes out by their `Successor` relation.
pub const STYLE: &str = include_str!("../../assets/nfa.style");

/// The three programs a Penrose renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenroseTrio {
    pub domain: &'static str,
    pub style: &'static str,
    pub substance: String,
}

pub fn trio(diagram: &Diagram, options: &ExportOptions) -> PenroseTrio {
    PenroseTrio { domain: DOMAIN, style: STYLE, substance: export_substance(diagram, options) }
}

pub fn export_substance(diagram: &Diagram, options: &ExportOptions) -> String {
    let mut out = String::with_capacity(64 * (diagram.nodes().len() + diagram.edges().len()));
    let node = |out: &mut String, id: NodeId| push_ident(out, &options.node_prefix, id.index());

    let mut layout_order = diagram.layout_order().iter().peekable();
    for record in diagram.nodes() {
        out.push_str("Node ");
        node(&mut out, record.id());
        out.push('\n');

        if let Some(order) = layout_order.next_if(|order| order.node == record.id()) {
            out.push_str("Successor(");
            node(&mut out, order.node);
            out.push_str(", ");
            node(&mut out, order.prev);
            out.push_str(")\n");
        }
    }

    for record in diagram.start_nodes() {
        out.push_str("IsStart(");
        node(&mut out, record.id());
        out.push_str(")\n");
    }

    for record in diagram.nodes() {
        out.push_str("Label ");
        node(&mut out, record.id());
        out.push(' ');
        push_quoted(&mut out, record.label());
        out.push('\n');

        if record.is_done() {
            out.push_str("IsDone(");
            node(&mut out, record.id());
            out.push_str(")\n");
        }

        for edge in diagram.edges_from(record.id()) {
            out.push_str("Edge ");
            push_ident(&mut out, &options.edge_prefix, edge.id().index());
            out.push_str(if edge.is_neighbor() {
                " := MakeNeighborEdge("
            } else {
                " := MakeEdge("
            });
            node(&mut out, edge.from());
            out.push_str(", ");
            node(&mut out, edge.to());
            out.push_str(")\n");

            out.push_str("Label ");
            push_ident(&mut out, &options.edge_prefix, edge.id().index());
            out.push(' ');
            push_quoted(&mut out, &edge.label().render(&options.epsilon));
            out.push('\n');
        }
    }

    out
}
