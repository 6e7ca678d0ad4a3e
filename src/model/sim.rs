// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lock-step NFA simulation, used to check compiled automata against their pattern.

use super::ids::NodeId;
use super::nfa::{Nfa, Node};

/// The set of consuming nodes reachable at one input position.
struct Threads {
    seen: Vec<bool>,
    list: Vec<NodeId>,
}

impl Threads {
    fn new(len: usize) -> Self {
        Self { seen: vec![false; len], list: Vec::with_capacity(len) }
    }

    fn clear(&mut self) {
        self.seen.iter_mut().for_each(|seen| *seen = false);
        self.list.clear();
    }
}

impl Nfa {
    /// Whether the automaton matches anywhere in `haystack`.
    ///
    /// References outside the node sequence are treated as dead ends.
    pub fn is_match(&self, haystack: &str) -> bool {
        let mut current = Threads::new(self.len());
        let mut stepped = Threads::new(self.len());
        let mut prev = None;
        let mut rest = haystack.chars();

        loop {
            let at = rest.clone().next();
            if self.follow(&mut current, self.start(), prev, at) {
                return true;
            }
            let Some(c) = at else {
                return false;
            };

            let mut after = rest.clone();
            after.next();
            let following = after.clone().next();

            stepped.clear();
            for &id in &current.list {
                let next = match self.get(id) {
                    Some(Node::Char { c: expected, next }) if *expected == c => Some(*next),
                    Some(Node::Sparse { class, next }) if class.matches(c) => Some(*next),
                    _ => None,
                };
                if let Some(next) = next {
                    if self.follow(&mut stepped, next, Some(c), following) {
                        return true;
                    }
                }
            }

            std::mem::swap(&mut current, &mut stepped);
            rest = after;
            prev = Some(c);
        }
    }

    /// Adds the ε-closure of `from` to `threads`; returns `true` once a `Done` node is reached.
    fn follow(
        &self,
        threads: &mut Threads,
        from: NodeId,
        prev: Option<char>,
        next: Option<char>,
    ) -> bool {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let Some(seen) = threads.seen.get_mut(id.index()) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;

            match &self.nodes()[id.index()] {
                Node::Done => return true,
                Node::Fail => {}
                Node::Save { next: to, .. } | Node::Epsilon { next: to } => stack.push(*to),
                Node::Split { next1, next2 } => {
                    stack.push(*next2);
                    stack.push(*next1);
                }
                Node::Anchor { anchor, next: to } => {
                    if anchor.holds(prev, next) {
                        stack.push(*to);
                    }
                }
                Node::Char { .. } | Node::Sparse { .. } => threads.list.push(id),
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{fixtures, Nfa, Node, NodeId};

    #[test]
    fn worked_example_matches_a_or_empty() {
        let nfa = fixtures::alt_with_empty();
        assert!(nfa.is_match(""));
        assert!(nfa.is_match("a"));
        assert!(nfa.is_match("zzz"));
    }

    #[test]
    fn single_char_needs_that_char() {
        let nfa = Nfa::new(
            vec![Node::Done, Node::Char { c: 'q', next: NodeId::new(0) }],
            NodeId::new(1),
        );
        assert!(nfa.is_match("aqa"));
        assert!(!nfa.is_match("abc"));
        assert!(!nfa.is_match(""));
    }

    #[test]
    fn fail_node_never_matches() {
        let nfa = Nfa::new(vec![Node::Done, Node::Fail], NodeId::new(1));
        assert!(!nfa.is_match("anything"));
    }

    #[test]
    fn dangling_references_are_dead_ends() {
        let nfa = Nfa::new(
            vec![Node::Done, Node::Epsilon { next: NodeId::new(9) }],
            NodeId::new(1),
        );
        assert!(!nfa.is_match("x"));
    }
}
