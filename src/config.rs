// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout configuration.
//!
//! ```toml
//! palette = ["#5aa1be", "#c065b8", "#c0ab5f", "#59bb7d"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::layout::palette::{Palette, DEFAULT_COLORS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    palette: Vec<SmolStr>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { palette: DEFAULT_COLORS.iter().copied().map(SmolStr::new_static).collect() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

impl GraphConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), colors = config.palette.len(), "loaded config");
        Ok(config)
    }

    /// Replaces the palette; later sources (CLI flags) override earlier ones.
    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.palette = colors.into_iter().map(|c| SmolStr::new(c.as_ref())).collect();
        self
    }

    pub fn palette_colors(&self) -> &[SmolStr] {
        &self.palette
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(&self.palette).ok_or(ConfigError::EmptyPalette)
    }
}
