// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Regviz: regular-expression NFAs as diagram descriptions.
//!
//! ```text
//! pattern ─ regex::compile_pattern ─┐
//!                                   ├─ Nfa ─ diagram::translate ─ Diagram ─ format::export
//! NFA JSON ─ store::load_nfa ───────┘
//! ```

pub mod config;
pub mod diagram;
pub mod format;
pub mod model;
pub mod regex;
pub mod store;
