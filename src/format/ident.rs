// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use ::regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentError {
    Empty,
    InvalidStart { ch: char },
    InvalidChar { ch: char },
}

impl fmt::Display for IdentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("must not be empty"),
            Self::InvalidStart { ch } => write!(f, "must not start with '{ch}'"),
            Self::InvalidChar { ch } => write!(f, "contains invalid character: '{ch}'"),
        }
    }
}

impl std::error::Error for IdentError {}

fn ident_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// Checks that `prefix` can start an identifier in every supported output grammar.
pub(crate) fn validate_ident_prefix(prefix: &str) -> Result<(), IdentError> {
    if ident_re().is_match(prefix) {
        return Ok(());
    }
    let mut chars = prefix.chars();
    match chars.next() {
        None => Err(IdentError::Empty),
        Some(ch) if !(ch.is_ascii_alphabetic() || ch == '_') => Err(IdentError::InvalidStart { ch }),
        Some(_) => {
            let ch = chars
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
                .unwrap_or(' ');
            Err(IdentError::InvalidChar { ch })
        }
    }
}

/// Appends `{prefix}{index}` to `out`.
pub(crate) fn push_ident(out: &mut String, prefix: &str, index: usize) {
    let mut buf = itoa::Buffer::new();
    out.push_str(prefix);
    out.push_str(buf.format(index));
}

pub(crate) fn ident(prefix: &str, index: usize) -> String {
    let mut out = String::with_capacity(prefix.len() + 4);
    push_ident(&mut out, prefix, index);
    out
}

/// Escapes `value` for a double-quoted string literal (Penrose, DOT).
pub(crate) fn escape_quoted(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    if memchr::memchr3(b'"', b'\\', b'\n', bytes).is_none()
        && memchr::memchr2(b'\r', b'\t', bytes).is_none()
    {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Pushes `"{escaped value}"` onto `out`.
pub(crate) fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(&escape_quoted(value));
    out.push('"');
}
