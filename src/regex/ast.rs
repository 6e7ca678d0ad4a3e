// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Anchor, CharClass};

/// Parsed regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Matches the empty string (`a|` has an empty right branch).
    Empty,
    Char(char),
    /// Bracket class, Perl class or `.`.
    Class(CharClass),
    Anchor(Anchor),
    /// Capturing group; group 0 is the whole pattern, so `index` starts at 1.
    Group { index: usize, expr: Box<Expr> },
    Concat(Vec<Expr>),
    Alternate(Box<Expr>, Box<Expr>),
    Repeat { expr: Box<Expr>, repetition: Repetition, greedy: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{min}`, `{min,}` or `{min,max}`.
    Range { min: u32, max: Option<u32> },
}
