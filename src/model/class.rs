// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character classes and zero-width assertions carried by `Sparse` and `Anchor` nodes.

use std::fmt::{self, Write as _};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A zero-width assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    End,
    WordBoundary,
    NonWordBoundary,
}

impl Anchor {
    /// The regex spelling used as the anchor's symbolic name on diagram edges.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Start => "^",
            Self::End => "$",
            Self::WordBoundary => r"\b",
            Self::NonWordBoundary => r"\B",
        }
    }

    /// Whether the assertion holds between `prev` and `next` (`None` at either end of the input).
    pub fn holds(self, prev: Option<char>, next: Option<char>) -> bool {
        match self {
            Self::Start => prev.is_none(),
            Self::End => next.is_none(),
            Self::WordBoundary => is_word_boundary(prev, next),
            Self::NonWordBoundary => !is_word_boundary(prev, next),
        }
    }
}

fn is_word_boundary(prev: Option<char>, next: Option<char>) -> bool {
    prev.is_some_and(is_word_char) != next.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `\d`, `\w` and `\s` with ASCII semantics, as in `(?-u:\d)`; `\b` uses the same word set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PerlClass {
    Digit,
    Word,
    Space,
}

impl PerlClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Word => is_word_char(c),
            Self::Space => matches!(c, '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' '),
        }
    }

    fn letter(self, negated: bool) -> char {
        let letter = match self {
            Self::Digit => 'd',
            Self::Word => 'w',
            Self::Space => 's',
        };
        if negated {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClassItem {
    Char(char),
    Range(char, char),
    Perl {
        class: PerlClass,
        #[serde(default)]
        negated: bool,
    },
}

impl ClassItem {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Char(expected) => c == expected,
            Self::Range(lo, hi) => lo <= c && c <= hi,
            Self::Perl { class, negated } => class.matches(c) != negated,
        }
    }
}

/// A set of characters, matched by a single `Sparse` transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CharClass {
    #[serde(default)]
    negated: bool,
    items: Vec<ClassItem>,
}

impl CharClass {
    pub fn new(negated: bool, items: Vec<ClassItem>) -> Self {
        Self { negated, items }
    }

    /// The class matched by `.`: everything but a newline.
    pub fn dot() -> Self {
        Self::new(true, vec![ClassItem::Char('\n')])
    }

    pub fn perl(class: PerlClass, negated: bool) -> Self {
        Self::new(false, vec![ClassItem::Perl { class, negated }])
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    pub fn is_dot(&self) -> bool {
        self.negated && self.items == [ClassItem::Char('\n')]
    }

    pub fn matches(&self, c: char) -> bool {
        self.items.iter().any(|item| item.matches(c)) != self.negated
    }
}

/// Writes the class in bracket notation, which doubles as the label of `Sparse` edges.
impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dot() {
            return f.write_char('.');
        }
        if let (false, [ClassItem::Perl { class, negated }]) = (self.negated, self.items.as_slice()) {
            return write!(f, "\\{}", class.letter(*negated));
        }

        f.write_char('[')?;
        if self.negated {
            f.write_char('^')?;
        }
        for item in &self.items {
            match *item {
                ClassItem::Char(c) => write_class_char(f, c)?,
                ClassItem::Range(lo, hi) => {
                    write_class_char(f, lo)?;
                    f.write_char('-')?;
                    write_class_char(f, hi)?;
                }
                ClassItem::Perl { class, negated } => write!(f, "\\{}", class.letter(negated))?,
            }
        }
        f.write_char(']')
    }
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        c if c.is_control() => write!(f, "{}", c.escape_default()),
        ']' | '[' | '\\' | '^' | '-' => {
            f.write_char('\\')?;
            f.write_char(c)
        }
        c => f.write_char(c),
    }
}
