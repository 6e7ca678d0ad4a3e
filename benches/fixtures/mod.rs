// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use regviz::model::Nfa;
use regviz::regex::compile_pattern;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// `a|`, six nodes.
    Small,
    /// An email-ish pattern with classes, anchors and loops.
    MediumClasses,
    /// Wide alternation of literal words.
    LargeAlternation,
    /// Counted repetition expanded into a long chain of splits.
    LargeCounted,
}

impl Case {
    pub const ALL: [(&'static str, Self); 4] = [
        ("small", Self::Small),
        ("medium_classes", Self::MediumClasses),
        ("large_alternation", Self::LargeAlternation),
        ("large_counted", Self::LargeCounted),
    ];
}

fn words(count: usize) -> String {
    let mut pattern = String::new();
    for index in 0..count {
        if index > 0 {
            pattern.push('|');
        }
        pattern.push_str("word");
        pattern.push_str(&index.to_string());
    }
    pattern
}

pub fn pattern(case: Case) -> String {
    match case {
        Case::Small => "a|".to_owned(),
        Case::MediumClasses => {
            r"^[A-Za-z0-9._%+-]+@(?:[a-z0-9-]+\.)+[a-z]{2,6}\b(?:\s*;\s*\w+)*$".to_owned()
        }
        Case::LargeAlternation => format!("(?:{})+", words(400)),
        Case::LargeCounted => r"(?:\d{1,3}\.){3}\d{1,3}(?:[a-f0-9]{0,200})".to_owned(),
    }
}

pub fn fixture(case: Case) -> Nfa {
    compile_pattern(&pattern(case)).expect("fixture pattern compiles")
}
