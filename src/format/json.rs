// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Diagram;

/// Pretty-printed JSON for renderers that consume the structured records directly.
pub fn export_json(diagram: &Diagram) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(diagram)?;
    out.push('\n');
    Ok(out)
}
