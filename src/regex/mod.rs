// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Regular expression front end.
//!
//! Patterns are parsed into an [`Expr`] and compiled into an [`Nfa`] whose
//! node sequence has the accepting node first and the entry point last.

mod ast;
mod compiler;
mod parser;

pub use ast::{Expr, Repetition};
pub use compiler::compile;
pub use parser::{ParseError, ParseErrorKind, MAX_NODES, MAX_REPETITION};

use crate::model::Nfa;

pub fn parse(pattern: &str) -> Result<Expr, ParseError> {
    parser::Parser::new(pattern).parse()
}

/// Parses and compiles `pattern` in one step.
pub fn compile_pattern(pattern: &str) -> Result<Nfa, ParseError> {
    let expr = parse(pattern)?;
    let nfa = compile(&expr);
    tracing::debug!(pattern, nodes = nfa.len(), "compiled pattern");
    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::{compile_pattern, ParseErrorKind, MAX_NODES};
    use crate::diagram::translate;

    #[rstest]
    #[case("a|", "", true)]
    #[case("abc", "xxabcxx", true)]
    #[case("abc", "abx", false)]
    #[case("^abc$", "abc", true)]
    #[case("^abc$", "abcd", false)]
    #[case("a(b|c)*d", "abcbcd", true)]
    #[case("a(b|c)*d", "abxd", false)]
    #[case("colou?r", "color", true)]
    #[case(r"\d{3}-\d{4}", "call 555-1234", true)]
    #[case(r"\d{3}-\d{4}", "555-123", false)]
    #[case("[^0-9]+", "123", false)]
    #[case(r"\bcat\b", "a cat sat", true)]
    #[case(r"\bcat\b", "concatenate", false)]
    #[case(r"\Bcat", "concatenate", true)]
    #[case("x{2,3}y", "xy", false)]
    #[case("x{2,3}y", "xxxy", true)]
    #[case(".", "\n", false)]
    #[case(r"\s\w", "a\tb", true)]
    #[case(r"\d", "\u{663}", false)]
    #[case(r"\w", "é", false)]
    #[case(r"\bx", "éx", true)]
    fn compiled_patterns_match_like_regexes(
        #[case] pattern: &str,
        #[case] haystack: &str,
        #[case] expected: bool,
    ) {
        let nfa = compile_pattern(pattern).expect("compile");
        assert_eq!(nfa.is_match(haystack), expected, "{pattern:?} on {haystack:?}");
    }

    #[test]
    fn parse_errors_surface_through_compile_pattern() {
        let err = compile_pattern("(ab").unwrap_err();
        assert_eq!(err.to_string(), "unclosed group at byte 0");
    }

    #[test]
    fn oversized_patterns_fail_before_compiling() {
        let err = compile_pattern("(?:(?:a{1000}){1000}){3}").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::TooLarge);
        assert_eq!(
            err.to_string(),
            format!("pattern compiles to more than {MAX_NODES} nodes at byte 21")
        );
    }

    /// Pairs of (pattern, oracle pattern); Perl classes are ASCII here and Unicode in the
    /// `regex` crate, so class leaves are spelled out for the oracle.
    fn arb_pattern() -> impl Strategy<Value = (String, String)> {
        let leaf = prop_oneof![
            Just(("a", "a")),
            Just(("b", "b")),
            Just((".", ".")),
            Just((r"\d", r"(?-u:\d)")),
            Just((r"\w", r"(?-u:\w)")),
            Just((r"\s", r"(?-u:\s)")),
            Just((r"\D", "[^0-9]")),
            Just((r"\W", "[^0-9A-Za-z_]")),
            Just((r"[a\d_]", "[a0-9_]")),
            Just(("^", "^")),
            Just(("$", "$")),
        ]
        .prop_map(|(ours, oracle)| (ours.to_owned(), oracle.to_owned()));
        leaf.prop_recursive(4, 24, 3, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone())
                    .prop_map(|((l, lo), (r, ro))| (format!("{l}{r}"), format!("{lo}{ro}"))),
                (inner.clone(), inner.clone()).prop_map(|((l, lo), (r, ro))| {
                    (format!("(?:{l}|{r})"), format!("(?:{lo}|{ro})"))
                }),
                inner.clone().prop_map(|(e, o)| (format!("(?:{e})*"), format!("(?:{o})*"))),
                inner.clone().prop_map(|(e, o)| (format!("(?:{e})+"), format!("(?:{o})+"))),
                inner.clone().prop_map(|(e, o)| (format!("({e})?"), format!("({o})?"))),
                inner.prop_map(|(e, o)| (format!("(?:{e}){{1,2}}"), format!("(?:{o}){{1,2}}"))),
            ]
        })
    }

    proptest! {
        #[test]
        fn agrees_with_the_regex_crate(
            (pattern, oracle) in arb_pattern(),
            haystack in "[ab1_ \\t\\x0B\u{663}\u{e9}\u{a0}]{0,8}",
        ) {
            let nfa = compile_pattern(&pattern).expect("compile");
            let reference = ::regex::Regex::new(&oracle).expect("reference regex");
            prop_assert_eq!(nfa.is_match(&haystack), reference.is_match(&haystack));
        }

        #[test]
        fn compiled_patterns_translate((pattern, _) in arb_pattern()) {
            let nfa = compile_pattern(&pattern).expect("compile");
            let diagram = translate(&nfa).expect("translate");
            prop_assert_eq!(diagram.nodes().len(), nfa.len());
            prop_assert_eq!(diagram.edges().len(), nfa.transition_count());
            prop_assert_eq!(diagram.start(), nfa.start());
        }

        #[test]
        fn escaped_literals_match_themselves(literal in "[ -~]{1,12}") {
            let nfa = compile_pattern(&::regex::escape(&literal)).expect("compile");
            prop_assert!(nfa.is_match(&literal));
        }
    }
}
