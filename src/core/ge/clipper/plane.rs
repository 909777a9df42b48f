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

//! Clip planes in homogeneous space
//!
//! A plane `(a, b, c, d)` keeps the points where
//! `a*x + b*y + c*z + d*w >= 0`. The hardware only clips against the near
//! plane `z + w >= 0`; everything else is bounded later by the rasterizer.

use bitflags::bitflags;

use super::super::types::ClipCoords;
use super::super::vertex::VertexData;

bitflags! {
    /// Per-vertex outcode: one bit per plane the vertex is outside of
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClipMask: u8 {
        const NEG_Z = 0x20;
    }
}

impl ClipMask {
    /// Outcode of a single clip-space position
    ///
    /// Checks `z / w < -1` without the division.
    #[inline(always)]
    pub fn of(p: &ClipCoords) -> Self {
        if p.z < -p.w {
            ClipMask::NEG_Z
        } else {
            ClipMask::empty()
        }
    }

    /// Union of the outcodes of several positions
    pub fn union_of<'a>(points: impl IntoIterator<Item = &'a ClipCoords>) -> Self {
        points
            .into_iter()
            .fold(ClipMask::empty(), |mask, p| mask | ClipMask::of(p))
    }
}

/// A clip plane equation with its outcode bit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub bit: ClipMask,
}

impl ClipPlane {
    /// `z + w >= 0`
    pub const NEAR: ClipPlane = ClipPlane::new(0.0, 0.0, 1.0, 1.0, ClipMask::NEG_Z);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, bit: ClipMask) -> Self {
        Self { a, b, c, d, bit }
    }

    /// Signed distance of `v` from the plane (unnormalized)
    ///
    /// Non-negative on the kept side.
    #[inline(always)]
    pub fn dist(&self, v: &VertexData) -> f32 {
        let p = &v.clip_pos;
        p.x * self.a + p.y * self.b + p.z * self.c + p.w * self.d
    }
}

/// Whether an edge with endpoint distances `x` and `y` crosses the plane
///
/// Zero counts with the negative side, so an edge from an inside vertex to
/// a vertex exactly on the plane is treated as crossing.
#[inline(always)]
pub fn different_signs(x: f32, y: f32) -> bool {
    (x <= 0.0 && y > 0.0) || (x > 0.0 && y <= 0.0)
}

/// Point on the plane between an outside and an inside vertex
///
/// Interpolates from `outside` toward `inside`, so the synthesized vertex
/// is the boundary crossing regardless of edge direction.
#[inline]
pub fn intersect(
    outside: &VertexData,
    inside: &VertexData,
    dist_outside: f32,
    dist_inside: f32,
) -> VertexData {
    let t = dist_outside / (dist_outside - dist_inside);
    VertexData::lerp(t, outside, inside)
}
