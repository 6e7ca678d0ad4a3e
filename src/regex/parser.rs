// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recursive descent parser.
//!
//! ```text
//! alternation ::= concat ('|' alternation)?
//! concat      ::= repeat*
//! repeat      ::= atom (quantifier '?'?)*
//! quantifier  ::= '*' | '+' | '?' | '{' n (',' n?)? '}'
//! atom        ::= '(' ('?:')? alternation ')' | '[' '^'? class_item+ ']' | '.' | '^' | '$'
//!               | '\' escape | CHAR
//! ```

use super::ast::{Expr, Repetition};
use super::compiler::compiled_len;
use crate::model::{Anchor, CharClass, ClassItem, PerlClass};

/// Upper bound for `{n,m}` counts; counted repetition is expanded into copies.
pub const MAX_REPETITION: u32 = 1000;

/// Upper bound on the length of the compiled NFA; nested counted repetition multiplies.
pub const MAX_NODES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unclosed group")]
    UnclosedGroup,
    #[error("unmatched ')'")]
    UnmatchedCloseParen,
    #[error("unsupported group flag")]
    UnsupportedGroupFlag,
    #[error("unterminated character class")]
    UnterminatedClass,
    #[error("empty character class")]
    EmptyClass,
    #[error("invalid class range {lo:?}-{hi:?}")]
    InvalidRange { lo: char, hi: char },
    #[error("quantifier without an expression to repeat")]
    DanglingQuantifier,
    #[error("malformed repetition")]
    InvalidRepetition,
    #[error("repetition count exceeds {}", MAX_REPETITION)]
    RepetitionTooLarge,
    #[error("pattern compiles to more than {} nodes", MAX_NODES)]
    TooLarge,
    #[error("unknown escape '\\{0}'")]
    UnknownEscape(char),
    #[error("trailing backslash")]
    TrailingBackslash,
}

/// A parse failure and the byte offset in the pattern where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {pos}")]
pub struct ParseError {
    kind: ParseErrorKind,
    pos: usize,
}

impl ParseError {
    fn new(kind: ParseErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}

type ParseResult<T> = Result<T, ParseError>;

/// What a single class member turned out to be.
enum ClassAtom {
    Char(char),
    Perl(PerlClass, bool),
}

pub(crate) struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
    next_group: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0, next_group: 1 }
    }

    pub(crate) fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.alternation()?;
        if self.peek().is_some() {
            return self.error(ParseErrorKind::UnmatchedCloseParen, self.pos);
        }
        self.check_size(&expr, 0)?;
        Ok(expr)
    }

    fn check_size(&self, expr: &Expr, at: usize) -> ParseResult<()> {
        if compiled_len(expr) > MAX_NODES {
            return self.error(ParseErrorKind::TooLarge, at);
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn error<T>(&self, kind: ParseErrorKind, pos: usize) -> ParseResult<T> {
        Err(ParseError::new(kind, pos))
    }

    fn alternation(&mut self) -> ParseResult<Expr> {
        let lhs = self.concat()?;
        if self.eat('|') {
            let rhs = self.alternation()?;
            return Ok(Expr::Alternate(Box::new(lhs), Box::new(rhs)));
        }
        Ok(lhs)
    }

    fn concat(&mut self) -> ParseResult<Expr> {
        let mut items = Vec::new();
        while !matches!(self.peek(), None | Some('|') | Some(')')) {
            items.push(self.repeat()?);
        }
        Ok(match items.len() {
            0 => Expr::Empty,
            1 => items.remove(0),
            _ => Expr::Concat(items),
        })
    }

    fn repeat(&mut self) -> ParseResult<Expr> {
        let mut expr = self.atom()?;
        loop {
            let at = self.pos;
            let repetition = match self.peek() {
                Some('*') => Repetition::ZeroOrMore,
                Some('+') => Repetition::OneOrMore,
                Some('?') => Repetition::ZeroOrOne,
                Some('{') => {
                    self.bump();
                    self.counted(at)?
                }
                _ => break,
            };
            if !matches!(repetition, Repetition::Range { .. }) {
                self.bump();
            }
            let greedy = !self.eat('?');
            expr = Expr::Repeat { expr: Box::new(expr), repetition, greedy };
            self.check_size(&expr, at)?;
        }
        Ok(expr)
    }

    /// `{n}`, `{n,}` or `{n,m}`, with the opening brace already consumed.
    fn counted(&mut self, open: usize) -> ParseResult<Repetition> {
        let min = self.number(open)?;
        let max = if self.eat(',') {
            if self.peek() == Some('}') {
                None
            } else {
                Some(self.number(open)?)
            }
        } else {
            Some(min)
        };
        if !self.eat('}') {
            return self.error(ParseErrorKind::InvalidRepetition, open);
        }
        if min > MAX_REPETITION || max.is_some_and(|max| max > MAX_REPETITION) {
            return self.error(ParseErrorKind::RepetitionTooLarge, open);
        }
        if max.is_some_and(|max| max < min) {
            return self.error(ParseErrorKind::InvalidRepetition, open);
        }
        Ok(Repetition::Range { min, max })
    }

    fn number(&mut self, open: usize) -> ParseResult<u32> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.pattern[start..self.pos];
        if digits.is_empty() {
            return self.error(ParseErrorKind::InvalidRepetition, open);
        }
        digits.parse().or_else(|_| self.error(ParseErrorKind::RepetitionTooLarge, open))
    }

    fn atom(&mut self) -> ParseResult<Expr> {
        let at = self.pos;
        let Some(c) = self.bump() else {
            return self.error(ParseErrorKind::DanglingQuantifier, at);
        };
        match c {
            '(' => self.group(at),
            '[' => self.class(at),
            '.' => Ok(Expr::Class(CharClass::dot())),
            '^' => Ok(Expr::Anchor(Anchor::Start)),
            '$' => Ok(Expr::Anchor(Anchor::End)),
            '\\' => self.escape(at),
            '*' | '+' | '?' | '{' => self.error(ParseErrorKind::DanglingQuantifier, at),
            c => Ok(Expr::Char(c)),
        }
    }

    fn group(&mut self, open: usize) -> ParseResult<Expr> {
        let index = if self.pattern[self.pos..].starts_with("?:") {
            self.pos += 2;
            None
        } else if self.peek() == Some('?') {
            return self.error(ParseErrorKind::UnsupportedGroupFlag, self.pos);
        } else {
            let index = self.next_group;
            self.next_group += 1;
            Some(index)
        };

        let expr = self.alternation()?;
        if !self.eat(')') {
            return self.error(ParseErrorKind::UnclosedGroup, open);
        }
        Ok(match index {
            Some(index) => Expr::Group { index, expr: Box::new(expr) },
            None => expr,
        })
    }

    fn escape(&mut self, at: usize) -> ParseResult<Expr> {
        let Some(c) = self.bump() else {
            return self.error(ParseErrorKind::TrailingBackslash, at);
        };
        if let Some((class, negated)) = perl_class(c) {
            return Ok(Expr::Class(CharClass::perl(class, negated)));
        }
        Ok(match c {
            'b' => Expr::Anchor(Anchor::WordBoundary),
            'B' => Expr::Anchor(Anchor::NonWordBoundary),
            'A' => Expr::Anchor(Anchor::Start),
            'z' => Expr::Anchor(Anchor::End),
            c => Expr::Char(self.escaped_char(c, at)?),
        })
    }

    fn escaped_char(&self, c: char, at: usize) -> ParseResult<char> {
        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            c if is_meta(c) => Ok(c),
            c => self.error(ParseErrorKind::UnknownEscape(c), at),
        }
    }

    fn class(&mut self, open: usize) -> ParseResult<Expr> {
        let negated = self.eat('^');
        let mut items = Vec::new();
        loop {
            if self.eat(']') {
                break;
            }
            let at = self.pos;
            let item = match self.class_atom(open)? {
                ClassAtom::Perl(class, negated) => ClassItem::Perl { class, negated },
                ClassAtom::Char(lo) if self.is_range_dash() => {
                    self.bump();
                    match self.class_atom(open)? {
                        ClassAtom::Char(hi) if lo <= hi => ClassItem::Range(lo, hi),
                        ClassAtom::Char(hi) => {
                            return self.error(ParseErrorKind::InvalidRange { lo, hi }, at);
                        }
                        ClassAtom::Perl(..) => {
                            return self.error(ParseErrorKind::InvalidRange { lo, hi: '-' }, at);
                        }
                    }
                }
                ClassAtom::Char(c) => ClassItem::Char(c),
            };
            items.push(item);
        }
        if items.is_empty() {
            return self.error(ParseErrorKind::EmptyClass, open);
        }
        Ok(Expr::Class(CharClass::new(negated, items)))
    }

    /// A `-` followed by something other than the closing bracket.
    fn is_range_dash(&self) -> bool {
        let mut rest = self.pattern[self.pos..].chars();
        rest.next() == Some('-') && !matches!(rest.next(), None | Some(']'))
    }

    fn class_atom(&mut self, open: usize) -> ParseResult<ClassAtom> {
        let at = self.pos;
        match self.bump() {
            None => self.error(ParseErrorKind::UnterminatedClass, open),
            Some('\\') => {
                let Some(c) = self.bump() else {
                    return self.error(ParseErrorKind::UnterminatedClass, open);
                };
                if let Some((class, negated)) = perl_class(c) {
                    return Ok(ClassAtom::Perl(class, negated));
                }
                self.escaped_char(c, at).map(ClassAtom::Char)
            }
            Some(c) => Ok(ClassAtom::Char(c)),
        }
    }
}

fn perl_class(c: char) -> Option<(PerlClass, bool)> {
    let class = match c.to_ascii_lowercase() {
        'd' => PerlClass::Digit,
        'w' => PerlClass::Word,
        's' => PerlClass::Space,
        _ => return None,
    };
    Some((class, c.is_ascii_uppercase()))
}

fn is_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '-'
            | '/' | '#' | '&' | '~'
    )
}
