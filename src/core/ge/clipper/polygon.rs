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

//! Convex polygon clipping (Sutherland-Hodgman, one plane per pass)
//!
//! Vertices live in a fixed-capacity [`VertexArena`]; polygons are ordered
//! [`IndexList`]s into it. A pass reads one index list and writes the other,
//! then the two are swapped, so nothing is allocated per primitive.
//!
//! # Capacity
//!
//! Against a single plane each of a triangle's 3 edges yields at most one
//! crossing, so the arena holds at most 3 + 3 vertices. An index list holds
//! the polygon plus the wrapped-around first index.

use super::plane::{different_signs, intersect, ClipPlane};
use super::super::vertex::VertexData;

/// Arena capacity: 3 input vertices + 3 crossings
pub const MAX_CLIPPED_VERTICES: usize = 6;

/// Index list capacity: arena size + the closing index
pub const MAX_POLYGON_INDICES: usize = MAX_CLIPPED_VERTICES + 1;

/// Fixed-capacity vertex storage for one clip call
#[derive(Debug, Clone)]
pub struct VertexArena {
    vertices: [VertexData; MAX_CLIPPED_VERTICES],
    len: usize,
}

impl VertexArena {
    pub fn from_triangle(v0: &VertexData, v1: &VertexData, v2: &VertexData) -> Self {
        let mut vertices = [VertexData::default(); MAX_CLIPPED_VERTICES];
        vertices[0] = *v0;
        vertices[1] = *v1;
        vertices[2] = *v2;
        Self { vertices, len: 3 }
    }

    /// Append a vertex, returning its index, or `None` when full
    pub fn push(&mut self, v: VertexData) -> Option<u8> {
        let slot = self.vertices.get_mut(self.len)?;
        *slot = v;
        self.len += 1;
        Some((self.len - 1) as u8)
    }

    #[inline(always)]
    pub fn get(&self, index: u8) -> &VertexData {
        &self.vertices[index as usize]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: u8) -> &mut VertexData {
        &mut self.vertices[index as usize]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Ordered, fixed-capacity list of arena indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexList {
    indices: [u8; MAX_POLYGON_INDICES],
    len: usize,
}

impl IndexList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle() -> Self {
        let mut list = Self::new();
        list.push(0);
        list.push(1);
        list.push(2);
        list
    }

    /// Append an index; indices past capacity are dropped
    #[inline]
    pub fn push(&mut self, index: u8) {
        debug_assert!(self.len < MAX_POLYGON_INDICES, "index list overflow");
        if let Some(slot) = self.indices.get_mut(self.len) {
            *slot = index;
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.indices[..self.len]
    }

    /// Fan triangulation around the first index
    ///
    /// Yields `(p0, p[i], p[i + 1])` for `i = 1..n-1`, preserving winding.
    pub fn fan(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        let poly = self.as_slice();
        let pivot = poly.first().copied().unwrap_or_default();
        poly.get(1..)
            .unwrap_or_default()
            .windows(2)
            .map(move |edge| [pivot, edge[0], edge[1]])
    }
}

/// Result of clipping a polygon against one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonClip {
    /// The polygon has at least 3 vertices left
    Kept {
        /// Whether any crossing vertex was synthesized
        synthesized: bool,
    },
    /// Fewer than 3 vertices remain; the primitive disappears
    Collapsed,
}

/// Clip the polygon in `poly` against `plane`
///
/// On [`PolygonClip::Kept`] the clipped polygon is left in `poly`; `scratch`
/// is used as the output buffer and swapped in. On collapse `poly` keeps its
/// input contents.
pub fn clip_polygon(
    plane: &ClipPlane,
    arena: &mut VertexArena,
    poly: &mut IndexList,
    scratch: &mut IndexList,
) -> PolygonClip {
    let n = poly.len();
    if n == 0 {
        return PolygonClip::Collapsed;
    }

    let first = poly.as_slice()[0];
    poly.push(first);
    scratch.clear();

    let mut synthesized = false;
    let mut idx_prev = first;
    let mut dist_prev = plane.dist(arena.get(idx_prev));

    for j in 1..=n {
        let idx = poly.as_slice()[j];
        let dist = plane.dist(arena.get(idx));

        if dist_prev >= 0.0 {
            scratch.push(idx_prev);
        }

        if different_signs(dist, dist_prev) {
            let crossing = if dist < 0.0 {
                intersect(arena.get(idx), arena.get(idx_prev), dist, dist_prev)
            } else {
                intersect(arena.get(idx_prev), arena.get(idx), dist_prev, dist)
            };

            match arena.push(crossing) {
                Some(new_idx) => {
                    scratch.push(new_idx);
                    synthesized = true;
                }
                None => log::trace!("clip arena full, dropping crossing vertex"),
            }
        }

        idx_prev = idx;
        dist_prev = dist;
    }

    if scratch.len() < 3 {
        poly.truncate(n);
        return PolygonClip::Collapsed;
    }

    std::mem::swap(poly, scratch);
    PolygonClip::Kept { synthesized }
}
