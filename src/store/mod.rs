// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading NFA files and writing rendered output.
//!
//! Output files are written to a temp file next to the target and renamed into place, so a
//! reader never observes a half-written diagram.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::PenroseTrio;
use crate::model::Nfa;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io { path: path.to_path_buf(), source }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

/// Reads and deserializes an NFA JSON file.
///
/// The file is not validated here; [`crate::diagram::translate`] reports out-of-range references.
pub fn load_nfa(path: impl AsRef<Path>) -> Result<Nfa, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(StoreError::io(path))?;
    serde_json::from_str(&text)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Deserializes an NFA from JSON text. Negative indices fail here.
pub fn parse_nfa(text: &str) -> Result<Nfa, serde_json::Error> {
    serde_json::from_str(text)
}

/// JSON Schema describing the NFA input format.
pub fn nfa_schema() -> serde_json::Value {
    schemars::schema_for!(Nfa).to_value()
}

/// Atomically replaces `path` with `contents`, creating parent directories as needed.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<(), StoreError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(StoreError::io(parent))?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(".regviz.tmp.{}.{nanos}", file_name.to_string_lossy()));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(StoreError::io(&tmp_path))?;
    if let Err(source) = file.write_all(contents.as_bytes()) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: tmp_path, source });
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Writes `{stem}.domain`, `{stem}.style` and `{stem}.substance` into `dir`.
pub fn write_trio(
    dir: impl AsRef<Path>,
    stem: &str,
    trio: &PenroseTrio,
) -> Result<Vec<PathBuf>, StoreError> {
    let dir = dir.as_ref();
    let files =
        [("domain", trio.domain), ("style", trio.style), ("substance", trio.substance.as_str())];
    let mut written = Vec::with_capacity(files.len());
    for (extension, contents) in files {
        let path = dir.join(format!("{stem}.{extension}"));
        write_output(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}
