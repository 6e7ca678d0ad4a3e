// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid flowchart export.

use std::borrow::Cow;

use super::ident::push_ident;
use super::ExportOptions;
use crate::model::{Diagram, DiagramNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeShape {
    Rect,
    Stadium,
    DoubleCircle,
}

impl NodeShape {
    fn of(node: &DiagramNode) -> Self {
        if node.is_done() {
            Self::DoubleCircle
        } else if node.is_start() {
            Self::Stadium
        } else {
            Self::Rect
        }
    }

    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Rect => ("[", "]"),
            Self::Stadium => ("([", "])"),
            Self::DoubleCircle => ("(((", ")))"),
        }
    }
}

/// Quotes a label; Mermaid has no backslash escapes, so `"` becomes an entity.
fn push_label(out: &mut String, label: &str) {
    let label = if label.contains('"') {
        Cow::Owned(label.replace('"', "#quot;"))
    } else {
        Cow::Borrowed(label)
    };
    out.push('"');
    out.push_str(&label);
    out.push('"');
}

fn push_link_style(out: &mut String, indices: &[usize], interpolate: &str) {
    if indices.is_empty() {
        return;
    }
    let mut buf = itoa::Buffer::new();
    out.push_str("linkStyle ");
    for (pos, index) in indices.iter().enumerate() {
        if pos > 0 {
            out.push(',');
        }
        out.push_str(buf.format(*index));
    }
    out.push_str(" interpolate ");
    out.push_str(interpolate);
    out.push('\n');
}

pub fn export_mermaid(diagram: &Diagram, options: &ExportOptions) -> String {
    let prefix = options.node_prefix.as_str();
    let mut out = String::new();
    out.push_str("flowchart ");
    out.push_str(options.mermaid_direction.as_str());
    out.push('\n');

    for node in diagram.nodes() {
        let (open, close) = NodeShape::of(node).delimiters();
        push_ident(&mut out, prefix, node.id().index());
        out.push_str(open);
        push_label(&mut out, node.label());
        out.push_str(close);
        out.push('\n');
    }

    let mut straight = Vec::new();
    let mut curved = Vec::new();
    for edge in diagram.edges() {
        push_ident(&mut out, prefix, edge.from().index());
        out.push_str(" -->|");
        push_label(&mut out, &edge.label().render(&options.epsilon));
        out.push_str("| ");
        push_ident(&mut out, prefix, edge.to().index());
        out.push('\n');

        if edge.is_neighbor() {
            straight.push(edge.id().index());
        } else {
            curved.push(edge.id().index());
        }
    }

    push_link_style(&mut out, &straight, "linear");
    push_link_style(&mut out, &curved, "basis");
    out
}
