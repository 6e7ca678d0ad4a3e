// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `regviz.toml` configuration.
//!
//! ```toml
//! format = "mermaid"
//! epsilon = "eps"
//!
//! [penrose]
//! node_prefix = "s"
//! edge_prefix = "t"
//!
//! [mermaid]
//! direction = "TD"
//!
//! [dot]
//! rankdir = "LR"
//! ```
//!
//! Every key is optional. Command-line flags are applied on top of the loaded file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::{Direction, ExportError, ExportOptions, Format};
use crate::model::DEFAULT_EPSILON;

pub const CONFIG_FILE_NAME: &str = "regviz.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PenroseConfig {
    pub node_prefix: String,
    pub edge_prefix: String,
}

impl Default for PenroseConfig {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self { node_prefix: options.node_prefix, edge_prefix: options.edge_prefix }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MermaidConfig {
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotConfig {
    pub rankdir: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Format,
    pub epsilon: String,
    pub penrose: PenroseConfig,
    pub mermaid: MermaidConfig,
    pub dot: DotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::default(),
            epsilon: DEFAULT_EPSILON.to_owned(),
            penrose: PenroseConfig::default(),
            mermaid: MermaidConfig::default(),
            dot: DotConfig::default(),
        }
    }
}

impl Config {
    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = toml::from_str(&text)
            .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Uses `explicit` when given, otherwise `regviz.toml` in the working directory if it
    /// exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::discover_in(Path::new("."), explicit)
    }

    pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::load(candidate);
        }
        tracing::debug!("no config file, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.export_options().validate()?;
        Ok(())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            epsilon: self.epsilon.clone(),
            node_prefix: self.penrose.node_prefix.clone(),
            edge_prefix: self.penrose.edge_prefix.clone(),
            mermaid_direction: self.mermaid.direction,
            dot_rankdir: self.dot.rankdir,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;

    use super::{Config, ConfigError, CONFIG_FILE_NAME};
    use crate::format::{Direction, ExportError, Format, IdentError};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = env::temp_dir().join(format!("regviz-config-{}-{counter}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn empty_file_is_the_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.export_options(), crate::format::ExportOptions::default());
    }

    #[test]
    fn full_file_maps_onto_export_options() {
        let config: Config = toml::from_str(
            r#"
            format = "dot"
            epsilon = "eps"

            [penrose]
            node_prefix = "state"
            edge_prefix = "arc"

            [mermaid]
            direction = "TD"

            [dot]
            rankdir = "BT"
            "#,
        )
        .unwrap();
        config.validate().unwrap();

        assert_eq!(config.format, Format::Dot);
        let options = config.export_options();
        assert_eq!(options.epsilon, "eps");
        assert_eq!(options.node_prefix, "state");
        assert_eq!(options.edge_prefix, "arc");
        assert_eq!(options.mermaid_direction, Direction::TopBottom);
        assert_eq!(options.dot_rankdir, Direction::BottomTop);
    }

    #[rstest]
    #[case::unknown_key("colour = \"red\"")]
    #[case::unknown_format("format = \"svg\"")]
    #[case::unknown_direction("[mermaid]\ndirection = \"diagonal\"")]
    fn rejects_bad_toml(#[case] text: &str) {
        assert!(toml::from_str::<Config>(text).is_err(), "{text}");
    }

    #[test]
    fn validate_rejects_bad_prefix() {
        let config: Config = toml::from_str("[penrose]\nnode_prefix = \"9n\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ExportError::InvalidPrefix {
                field: "node_prefix",
                reason: IdentError::InvalidStart { ch: '9' },
                ..
            })
        ));
    }

    #[test]
    fn discover_prefers_explicit_then_local_file() {
        let dir = scratch_dir();
        assert_eq!(Config::discover_in(&dir, None).unwrap(), Config::default());

        fs::write(dir.join(CONFIG_FILE_NAME), "format = \"mermaid\"").unwrap();
        assert_eq!(Config::discover_in(&dir, None).unwrap().format, Format::Mermaid);

        let explicit = dir.join("other.toml");
        fs::write(&explicit, "format = \"json\"").unwrap();
        assert_eq!(Config::discover_in(&dir, Some(&explicit)).unwrap().format, Format::Json);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = scratch_dir();
        let err = Config::discover_in(&dir, Some(&dir.join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_toml_errors_with_path() {
        let dir = scratch_dir();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "epsilon = [").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Toml { path: p, .. } if *p == path), "{err:?}");
        let _ = fs::remove_dir_all(&dir);
    }
}
