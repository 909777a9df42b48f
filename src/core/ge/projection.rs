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

//! Clip-space to screen-space projection
//!
//! The clipper only needs one operation from the transform stage: mapping a
//! clip coordinate it synthesized (or moved) back to a screen coordinate.
//! [`Projector`] is that seam. [`Viewport`] is the stock implementation,
//! performing the perspective divide followed by the viewport transform.

use serde::{Deserialize, Serialize};

use super::types::{ClipCoords, ScreenCoords};

/// Maps clip coordinates to screen coordinates
pub trait Projector {
    fn clip_to_screen(&self, clip: &ClipCoords) -> ScreenCoords;
}

impl<F> Projector for F
where
    F: Fn(&ClipCoords) -> ScreenCoords,
{
    #[inline]
    fn clip_to_screen(&self, clip: &ClipCoords) -> ScreenCoords {
        self(clip)
    }
}

/// Viewport transform
///
/// ```text
/// screen.x = clip.x * x_scale / clip.w + x_center - offset_x
/// screen.y = clip.y * y_scale / clip.w + y_center - offset_y
/// screen.z = clip.z * z_scale / clip.w + z_center
/// ```
///
/// # Examples
///
/// ```
/// use pspge::core::ge::{ClipCoords, Projector, ScreenCoords, Viewport};
///
/// let vp = Viewport::default();
/// let center = vp.clip_to_screen(&ClipCoords::new(0.0, 0.0, 0.0, 1.0));
/// assert_eq!(center, ScreenCoords::new(240.0, 136.0, 32767.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub x_scale: f32,
    pub y_scale: f32,
    pub z_scale: f32,
    pub x_center: f32,
    pub y_center: f32,
    pub z_center: f32,
    /// Screen offset subtracted after the viewport transform
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: f32 = 480.0;

    /// Screen height in pixels
    pub const SCREEN_HEIGHT: f32 = 272.0;

    /// Half of the 16-bit depth range
    pub const HALF_DEPTH: f32 = 65535.0 / 2.0;
}

impl Default for Viewport {
    /// Full-screen viewport with Y pointing down and the full depth range
    fn default() -> Self {
        Self {
            x_scale: Self::SCREEN_WIDTH / 2.0,
            y_scale: -Self::SCREEN_HEIGHT / 2.0,
            z_scale: Self::HALF_DEPTH,
            x_center: Self::SCREEN_WIDTH / 2.0,
            y_center: Self::SCREEN_HEIGHT / 2.0,
            z_center: Self::HALF_DEPTH,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Projector for Viewport {
    fn clip_to_screen(&self, clip: &ClipCoords) -> ScreenCoords {
        ScreenCoords {
            x: clip.x * self.x_scale / clip.w + self.x_center - self.offset_x,
            y: clip.y * self.y_scale / clip.w + self.y_center - self.offset_y,
            z: clip.z * self.z_scale / clip.w + self.z_center,
        }
    }
}
