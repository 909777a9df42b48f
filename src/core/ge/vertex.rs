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

//! Transformed vertex data
//!
//! A [`VertexData`] is what the transform stage hands to the clipper: a
//! clip-space position, the matching screen position, and every attribute the
//! rasterizer interpolates across a primitive.

use serde::{Deserialize, Serialize};

use super::types::{lerp_f32, ClipCoords, Color, ScreenCoords, TexCoords};

/// A fully transformed vertex
///
/// # Invariants
///
/// Outside through mode, `screen_pos` must be the projection of `clip_pos`.
/// Whenever the clipper moves `clip_pos` it re-projects `screen_pos`. In
/// through mode `screen_pos` is authoritative and `clip_pos.w` is 1.
///
/// # Examples
///
/// ```
/// use pspge::core::ge::{ClipCoords, Color, VertexData};
///
/// let a = VertexData::at_clip(ClipCoords::new(0.0, 0.0, -2.0, 1.0));
/// let b = VertexData::at_clip(ClipCoords::new(0.0, 0.0, 0.0, 1.0));
///
/// let mid = VertexData::lerp(0.5, &a, &b);
/// assert_eq!(mid.clip_pos.z, -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexData {
    /// Homogeneous clip-space position
    pub clip_pos: ClipCoords,

    /// Screen-space position (projected, or direct in through mode)
    pub screen_pos: ScreenCoords,

    /// Texture coordinates
    pub tex_coords: TexCoords,

    /// Primary color
    pub color0: Color,

    /// Secondary color (RGB)
    pub color1: Color,

    /// Fog interpolation factor
    pub fog_depth: f32,
}

impl VertexData {
    /// Create a vertex positioned in clip space with all other fields zeroed
    pub fn at_clip(clip_pos: ClipCoords) -> Self {
        Self {
            clip_pos,
            ..Default::default()
        }
    }

    /// Create a vertex positioned directly in screen space (through mode)
    pub fn at_screen(screen_pos: ScreenCoords) -> Self {
        Self {
            clip_pos: ClipCoords::new(0.0, 0.0, 0.0, 1.0),
            screen_pos,
            ..Default::default()
        }
    }

    /// Blend every interpolated field from `a` toward `b`
    ///
    /// `t = 0` yields `a`, `t = 1` yields `b`. Colors use an 8-bit
    /// fixed-point factor (see [`Color::lerp`]). The screen position is
    /// blended linearly as well, which is only meaningful in screen space;
    /// callers working in clip space re-project afterwards.
    pub fn lerp(t: f32, a: &VertexData, b: &VertexData) -> VertexData {
        VertexData {
            clip_pos: a.clip_pos.lerp(&b.clip_pos, t),
            screen_pos: a.screen_pos.lerp(&b.screen_pos, t),
            tex_coords: a.tex_coords.lerp(&b.tex_coords, t),
            color0: a.color0.lerp(&b.color0, t),
            color1: a.color1.lerp(&b.color1, t),
            fog_depth: lerp_f32(a.fog_depth, b.fog_depth, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(z: f32, s: f32, red: u8, fog: f32) -> VertexData {
        VertexData {
            clip_pos: ClipCoords::new(1.0, -1.0, z, 2.0),
            screen_pos: ScreenCoords::new(10.0, 20.0, z),
            tex_coords: TexCoords::new(s, 1.0 - s),
            color0: Color::new(red, 0, 0, 255),
            color1: Color::new(0, red, 0, 0),
            fog_depth: fog,
        }
    }

    #[test]
    fn test_lerp_zero_is_first() {
        let a = sample(-4.0, 0.0, 10, 0.0);
        let b = sample(4.0, 1.0, 250, 1.0);
        assert_eq!(VertexData::lerp(0.0, &a, &b), a);
    }

    #[test]
    fn test_lerp_one_is_second() {
        let a = sample(-4.0, 0.0, 10, 0.0);
        let b = sample(4.0, 1.0, 250, 1.0);
        assert_eq!(VertexData::lerp(1.0, &a, &b), b);
    }

    #[test]
    fn test_lerp_quarter_blends_every_field() {
        let a = sample(-4.0, 0.0, 0, 0.0);
        let b = sample(4.0, 1.0, 200, 1.0);
        let v = VertexData::lerp(0.25, &a, &b);

        assert_eq!(v.clip_pos.z, -2.0);
        assert_eq!(v.screen_pos.z, -2.0);
        assert_eq!(v.tex_coords, TexCoords::new(0.25, 0.75));
        assert_eq!(v.color0.r, 50);
        assert_eq!(v.color1.g, 50);
        assert_eq!(v.fog_depth, 0.25);
    }

    #[test]
    fn test_at_screen_has_unit_w() {
        let v = VertexData::at_screen(ScreenCoords::new(5.0, 6.0, 7.0));
        assert_eq!(v.clip_pos.w, 1.0);
        assert_eq!(v.screen_pos, ScreenCoords::new(5.0, 6.0, 7.0));
    }
}
