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

//! Primitive scenes
//!
//! A scene is an ordered list of already-transformed primitives stored as
//! JSON. Scenes feed the command-line tool and the integration tests.
//!
//! # Format
//!
//! ```json
//! {
//!   "primitives": [
//!     { "type": "point", "vertex": { "clip_pos": { "x": 0, "y": 0, "z": 0, "w": 1 } } },
//!     { "type": "triangle", "vertices": [ ... ], "provoking": "v0" },
//!     { "type": "rectangle", "vertices": [ ... ] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GeError, Result};
use super::ge::{BinnedPrimitive, Binner, Clipper, Primitive, PrimitiveLog, Projector};

/// Ordered list of primitive submissions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Parse a scene from JSON text
    ///
    /// # Examples
    ///
    /// ```
    /// use pspge::core::scene::Scene;
    ///
    /// let scene = Scene::parse(r#"{ "primitives": [
    ///     { "type": "point", "vertex": {} }
    /// ] }"#).unwrap();
    /// assert_eq!(scene.primitives.len(), 1);
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(data)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeError::NotFound(path.display().to_string()));
        }

        log::info!("Loading scene from: {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Check that the scene has something to draw
    pub fn validate(&self) -> Result<()> {
        if self.primitives.is_empty() {
            return Err(GeError::InvalidScene("scene has no primitives".to_string()));
        }
        Ok(())
    }

    /// Run every primitive through `clipper` into a fresh [`PrimitiveLog`]
    pub fn run<P: Projector + ?Sized>(&self, clipper: &Clipper<'_, P>) -> PrimitiveLog {
        let mut log = PrimitiveLog::new();
        self.run_into(clipper, &mut log);
        log
    }

    /// Run every primitive through `clipper` into `binner`
    pub fn run_into<P, B>(&self, clipper: &Clipper<'_, P>, binner: &mut B)
    where
        P: Projector + ?Sized,
        B: Binner + ?Sized,
    {
        clipper.process_all(&self.primitives, binner);
    }
}

/// Serialize binned output as pretty JSON
pub fn binned_to_json(primitives: &[BinnedPrimitive]) -> Result<String> {
    Ok(serde_json::to_string_pretty(primitives)?)
}
