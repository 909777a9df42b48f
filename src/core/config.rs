// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geometry stage configuration
//!
//! Render state and viewport are read from a TOML file. Every key is
//! optional; missing keys fall back to the power-on defaults.
//!
//! # Example
//!
//! ```
//! use pspge::core::config::Config;
//! use pspge::core::ge::ShadeMode;
//!
//! let data = r#"
//!     [render_state]
//!     depth_clamp = true
//!     shade_mode = "flat"
//!
//!     [viewport]
//!     offset_x = 16.0
//! "#;
//!
//! let config = Config::parse(data).unwrap();
//! assert!(config.render_state.depth_clamp);
//! assert_eq!(config.render_state.shade_mode, ShadeMode::Flat);
//! assert_eq!(config.viewport.offset_x, 16.0);
//! assert_eq!(config.viewport.x_scale, 240.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GeError, Result};
use super::ge::{RenderState, Viewport};

/// Environment variable naming the default config file
pub const CONFIG_ENV_VAR: &str = "PSPGE_CONFIG";

/// Geometry stage configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render_state: RenderState,
    pub viewport: Viewport,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(data: &str) -> Result<Self> {
        let config: Config = toml::from_str(data)?;
        log::debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// - [`GeError::NotFound`] if the file does not exist
    /// - [`GeError::Io`] if the file cannot be read
    /// - [`GeError::Config`] if the contents are not valid configuration
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeError::NotFound(path.display().to_string()));
        }

        log::info!("Loading config from: {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Load the file named by `PSPGE_CONFIG`, or defaults if it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
