// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::class::{Anchor, CharClass, ClassItem, PerlClass};
use super::ids::NodeId;
use super::nfa::{Nfa, Node};

fn id(index: usize) -> NodeId {
    NodeId::new(index)
}

/// The automaton compiled from `a|`.
pub(crate) fn alt_with_empty() -> Nfa {
    Nfa::new(
        vec![
            Node::Done,
            Node::Save { slot: 1, next: id(0) },
            Node::Char { c: 'a', next: id(1) },
            Node::Epsilon { next: id(1) },
            Node::Split { next1: id(2), next2: id(3) },
            Node::Save { slot: 0, next: id(4) },
        ],
        id(5),
    )
}

/// Hand-built automaton touching every node variant, roughly `^[a-z]\d*$` with a dead branch.
pub(crate) fn every_variant() -> Nfa {
    Nfa::new(
        vec![
            Node::Done,
            Node::Save { slot: 1, next: id(0) },
            Node::Anchor { anchor: Anchor::End, next: id(1) },
            Node::Sparse { class: CharClass::perl(PerlClass::Digit, false), next: id(4) },
            Node::Split { next1: id(3), next2: id(2) },
            Node::Sparse {
                class: CharClass::new(false, vec![ClassItem::Range('a', 'z')]),
                next: id(4),
            },
            Node::Fail,
            Node::Split { next1: id(5), next2: id(6) },
            Node::Anchor { anchor: Anchor::Start, next: id(7) },
            Node::Save { slot: 0, next: id(8) },
        ],
        id(9),
    )
}
