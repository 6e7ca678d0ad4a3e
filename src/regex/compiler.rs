// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backward Thompson construction.
//!
//! Every fragment is compiled against the node it continues into, so a
//! continuation always exists before the nodes that point at it. Node 0 is the
//! accepting node and the entry point is pushed last.

use super::ast::{Expr, Repetition};
use crate::model::{Nfa, Node, NodeId};

struct Compiler {
    nodes: Vec<Node>,
}

impl Compiler {
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn expr(&mut self, expr: &Expr, next: NodeId) -> NodeId {
        match expr {
            Expr::Empty => self.push(Node::Epsilon { next }),
            Expr::Char(c) => self.push(Node::Char { c: *c, next }),
            Expr::Class(class) => self.push(Node::Sparse { class: class.clone(), next }),
            Expr::Anchor(anchor) => self.push(Node::Anchor { anchor: *anchor, next }),
            Expr::Group { index, expr } => {
                let close = self.push(Node::Save { slot: 2 * index + 1, next });
                let body = self.expr(expr, close);
                self.push(Node::Save { slot: 2 * index, next: body })
            }
            Expr::Concat(items) => {
                let mut next = next;
                for item in items.iter().rev() {
                    next = self.expr(item, next);
                }
                next
            }
            Expr::Alternate(lhs, rhs) => {
                let next1 = self.expr(lhs, next);
                let next2 = self.expr(rhs, next);
                self.push(Node::Split { next1, next2 })
            }
            Expr::Repeat { expr, repetition, greedy } => {
                self.repeat(expr, *repetition, *greedy, next)
            }
        }
    }

    fn repeat(&mut self, expr: &Expr, repetition: Repetition, greedy: bool, next: NodeId) -> NodeId {
        match repetition {
            Repetition::ZeroOrMore => self.star(expr, greedy, next).0,
            Repetition::OneOrMore => self.star(expr, greedy, next).1,
            Repetition::ZeroOrOne => {
                let body = self.expr(expr, next);
                self.push(split(body, next, greedy))
            }
            Repetition::Range { min, max } => {
                let mut next = match max {
                    None => self.star(expr, greedy, next).0,
                    Some(max) => {
                        let mut next = next;
                        for _ in min..max {
                            next = self.repeat(expr, Repetition::ZeroOrOne, greedy, next);
                        }
                        next
                    }
                };
                for _ in 0..min {
                    next = self.expr(expr, next);
                }
                next
            }
        }
    }

    /// Compiles a loop and returns `(loop_head, body_entry)`.
    ///
    /// The head is reserved as a `Fail` placeholder because the body has to point back at it
    /// before the split it becomes can be built.
    fn star(&mut self, expr: &Expr, greedy: bool, next: NodeId) -> (NodeId, NodeId) {
        let head = self.push(Node::Fail);
        let body = self.expr(expr, head);
        self.nodes[head.index()] = split(body, next, greedy);
        (head, body)
    }
}

fn split(preferred: NodeId, other: NodeId, greedy: bool) -> Node {
    if greedy {
        Node::Split { next1: preferred, next2: other }
    } else {
        Node::Split { next1: other, next2: preferred }
    }
}

/// Nodes [`compile`] emits for `expr` on its own, saturating at `usize::MAX`.
fn fragment_len(expr: &Expr) -> usize {
    match expr {
        Expr::Empty | Expr::Char(_) | Expr::Class(_) | Expr::Anchor(_) => 1,
        Expr::Group { expr, .. } => fragment_len(expr).saturating_add(2),
        Expr::Concat(items) => {
            items.iter().fold(0, |len, item| len.saturating_add(fragment_len(item)))
        }
        Expr::Alternate(lhs, rhs) => {
            fragment_len(lhs).saturating_add(fragment_len(rhs)).saturating_add(1)
        }
        Expr::Repeat { expr, repetition, .. } => {
            let body = fragment_len(expr);
            let looped = body.saturating_add(1);
            match *repetition {
                Repetition::ZeroOrMore | Repetition::OneOrMore | Repetition::ZeroOrOne => looped,
                Repetition::Range { min, max } => {
                    let optional = match max {
                        None => looped,
                        Some(max) => looped.saturating_mul((max - min) as usize),
                    };
                    body.saturating_mul(min as usize).saturating_add(optional)
                }
            }
        }
    }
}

/// Length of the NFA [`compile`] produces for `expr`, including the accepting node and
/// the two slot-0/1 saves.
pub(crate) fn compiled_len(expr: &Expr) -> usize {
    fragment_len(expr).saturating_add(3)
}

/// Compiles a parsed expression into an NFA whose start node records slot 0.
///
/// No size limit is applied here; [`crate::regex::parse`] rejects patterns whose NFA would
/// exceed [`crate::regex::MAX_NODES`].
pub fn compile(expr: &Expr) -> Nfa {
    let mut compiler = Compiler { nodes: vec![Node::Done] };
    let close = compiler.push(Node::Save { slot: 1, next: NodeId::new(0) });
    let body = compiler.expr(expr, close);
    let start = compiler.push(Node::Save { slot: 0, next: body });
    tracing::trace!(nodes = compiler.nodes.len(), start = %start, "compiled expression");
    Nfa::new(compiler.nodes, start)
}
