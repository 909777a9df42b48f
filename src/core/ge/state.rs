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

//! Render state consumed by the geometry stage
//!
//! This is the read-only subset of the graphics engine's state registers that
//! influences clipping and primitive decomposition.

use serde::{Deserialize, Serialize};

/// Shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    /// One color per primitive, taken from the provoking vertex
    Flat,
    /// Colors interpolated across the primitive
    #[default]
    #[serde(alias = "gouraud")]
    Smooth,
}

/// Render state flags
///
/// Passed by reference into the [`Clipper`](super::Clipper); never mutated by
/// the geometry stage.
///
/// # Examples
///
/// ```
/// use pspge::core::ge::{RenderState, ShadeMode};
///
/// let state = RenderState {
///     shade_mode: ShadeMode::Flat,
///     ..Default::default()
/// };
/// assert!(state.is_flat_shaded());
/// assert!(!state.through_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderState {
    /// Positions are already in screen space; clip-space math is bypassed
    pub through_mode: bool,

    /// Out-of-range depth is clamped instead of rejecting the primitive
    pub depth_clamp: bool,

    /// Shading model
    pub shade_mode: ShadeMode,

    /// Clear mode (depth/color clear through rectangle draws)
    pub clear_mode: bool,

    /// Dithering enabled
    pub dither: bool,
}

impl RenderState {
    #[inline(always)]
    pub fn is_flat_shaded(&self) -> bool {
        self.shade_mode == ShadeMode::Flat
    }

    /// Whether a through-mode rectangle collapses to a clear-rectangle fill
    ///
    /// Clear mode without dithering draws a flat fill on hardware.
    #[inline(always)]
    pub fn clears_as_rect(&self) -> bool {
        self.clear_mode && !self.dither
    }
}
