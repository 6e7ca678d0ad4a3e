// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphviz [dot](https://graphviz.org/docs/layouts/dot/) export.
//!
//! Layout order becomes invisible, heavily weighted edges so dot keeps the sequence on one
//! rank line; transitions that skip over nodes are excluded from ranking.

use super::ident::{push_ident, push_quoted};
use super::ExportOptions;
use crate::model::Diagram;

const ENTRY: &str = "__entry";
const LAYOUT_WEIGHT: u32 = 10;

pub fn export_dot(diagram: &Diagram, options: &ExportOptions) -> String {
    let prefix = options.node_prefix.as_str();
    let mut out = String::new();
    out.push_str("digraph nfa {\n");
    out.push_str("\trankdir = ");
    out.push_str(options.dot_rankdir.as_str());
    out.push_str(";\n");
    out.push_str("\tnode [shape = box, style = rounded];\n");

    out.push_str("\n\t// entry\n");
    out.push_str("\t");
    out.push_str(ENTRY);
    out.push_str(" [shape = point, label = \"\"];\n");
    for node in diagram.start_nodes() {
        out.push('\t');
        out.push_str(ENTRY);
        out.push_str(" -> ");
        push_ident(&mut out, prefix, node.id().index());
        out.push_str(";\n");
    }

    out.push_str("\n\t// nodes\n");
    for node in diagram.nodes() {
        out.push('\t');
        push_ident(&mut out, prefix, node.id().index());
        out.push_str(" [label = ");
        push_quoted(&mut out, node.label());
        if node.is_done() {
            out.push_str(", peripheries = 2");
        }
        if node.is_start() {
            out.push_str(", penwidth = 2");
        }
        out.push_str("];\n");
    }

    if !diagram.layout_order().is_empty() {
        out.push_str("\n\t// layout order\n");
    }
    for order in diagram.layout_order() {
        out.push('\t');
        push_ident(&mut out, prefix, order.node.index());
        out.push_str(" -> ");
        push_ident(&mut out, prefix, order.prev.index());
        out.push_str(&format!(" [style = invis, weight = {LAYOUT_WEIGHT}];\n"));
    }

    if !diagram.edges().is_empty() {
        out.push_str("\n\t// transitions\n");
    }
    for edge in diagram.edges() {
        out.push('\t');
        push_ident(&mut out, prefix, edge.from().index());
        out.push_str(" -> ");
        push_ident(&mut out, prefix, edge.to().index());
        out.push_str(" [label = ");
        push_quoted(&mut out, &edge.label().render(&options.epsilon));
        if !edge.is_neighbor() {
            out.push_str(", constraint = false");
        }
        out.push_str("];\n");
    }

    out.push_str("}\n");
    out
}
