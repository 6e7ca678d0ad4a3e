// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram export for the supported renderers.
//!
//! Every exporter keeps the same semantics: one node per NFA node in sequence order, one
//! edge per transition with its label, straight (neighbor) vs. curved edges, and the
//! layout-order relation kept apart from the transitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Diagram, DEFAULT_EPSILON};

pub mod dot;
mod ident;
pub mod json;
pub mod mermaid;
pub mod penrose;

pub use dot::export_dot;
pub use ident::IdentError;
pub use json::export_json;
pub use mermaid::export_mermaid;
pub use penrose::{export_substance, trio, PenroseTrio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Substance,
    Mermaid,
    Dot,
    Json,
}

impl Format {
    pub const ALL: [Self; 4] = [Self::Substance, Self::Mermaid, Self::Dot, Self::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substance => "substance",
            Self::Mermaid => "mermaid",
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }

    /// File extension used when writing this format to disk.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Substance => "substance",
            Self::Mermaid => "mmd",
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format: {value} (expected substance/mermaid/dot/json)")]
pub struct UnknownFormat {
    value: String,
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat { value: s.to_owned() })
    }
}

/// Flow direction for renderers that lay nodes out along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "TB", alias = "TD")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Text shown on ε-transitions.
    pub epsilon: String,
    /// Identifier prefix for nodes (`n` → `n0`, `n1`, ...).
    pub node_prefix: String,
    /// Identifier prefix for edges (Penrose only).
    pub edge_prefix: String,
    pub mermaid_direction: Direction,
    pub dot_rankdir: Direction,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON.to_owned(),
            node_prefix: "n".to_owned(),
            edge_prefix: "e".to_owned(),
            mermaid_direction: Direction::LeftRight,
            dot_rankdir: Direction::LeftRight,
        }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.epsilon.is_empty() {
            return Err(ExportError::EmptyEpsilon);
        }
        ident::validate_ident_prefix(&self.node_prefix).map_err(|reason| {
            ExportError::InvalidPrefix {
                field: "node_prefix",
                value: self.node_prefix.clone(),
                reason,
            }
        })?;
        ident::validate_ident_prefix(&self.edge_prefix).map_err(|reason| {
            ExportError::InvalidPrefix {
                field: "edge_prefix",
                value: self.edge_prefix.clone(),
                reason,
            }
        })?;
        if prefixes_clash(&self.node_prefix, &self.edge_prefix) {
            return Err(ExportError::PrefixClash {
                node_prefix: self.node_prefix.clone(),
                edge_prefix: self.edge_prefix.clone(),
            });
        }
        Ok(())
    }
}

/// Identifiers are `prefix` + index, so two prefixes collide when the longer one is the
/// shorter one followed only by digits (`n` and `n1` both spell `n10`).
fn prefixes_clash(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    long.strip_prefix(short).is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidPrefix {
        field: &'static str,
        value: String,
        reason: IdentError,
    },
    #[error("node prefix {node_prefix:?} and edge prefix {edge_prefix:?} can spell the same identifier")]
    PrefixClash { node_prefix: String, edge_prefix: String },
    #[error("the epsilon symbol must not be empty")]
    EmptyEpsilon,
    #[error("cannot serialize diagram as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes `diagram` in the requested format.
pub fn export(
    diagram: &Diagram,
    format: Format,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    options.validate()?;
    let out = match format {
        Format::Substance => export_substance(diagram, options),
        Format::Mermaid => export_mermaid(diagram, options),
        Format::Dot => export_dot(diagram, options),
        Format::Json => export_json(diagram)?,
    };
    tracing::debug!(%format, bytes = out.len(), "exported diagram");
    Ok(out)
}
