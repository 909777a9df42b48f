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

//! Flat-shading correction
//!
//! The rasterizer takes a flat-shaded triangle's color from its last vertex.
//! Before any triangle leaves the clipper, that vertex gets the provoking
//! vertex's colors, so the result does not depend on how clipping reordered
//! or split the primitive.

use super::super::binner::Binner;
use super::super::primitive::Provoking;
use super::super::state::RenderState;
use super::super::types::Color;
use super::super::vertex::VertexData;

/// Colors of the provoking vertex, resolved before clipping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvokingColors {
    pub color0: Color,
    pub color1: Color,
}

impl ProvokingColors {
    pub fn resolve(
        provoking: &Provoking,
        v0: &VertexData,
        v1: &VertexData,
        v2: &VertexData,
    ) -> Self {
        let (color0, color1) = provoking.colors([v0, v1, v2]);
        Self { color0, color1 }
    }

    /// Copy of `v` carrying the provoking colors
    #[inline]
    pub fn applied_to(&self, v: &VertexData) -> VertexData {
        VertexData {
            color0: self.color0,
            color1: self.color1,
            ..*v
        }
    }
}

/// Emit a triangle, flat-correcting its last vertex when flat shading is on
#[inline]
pub fn emit_triangle<B: Binner + ?Sized>(
    state: &RenderState,
    v0: &VertexData,
    v1: &VertexData,
    v2: &VertexData,
    provoking: &ProvokingColors,
    binner: &mut B,
) {
    if state.is_flat_shaded() {
        let corrected = provoking.applied_to(v2);
        binner.add_triangle(v0, v1, &corrected);
    } else {
        binner.add_triangle(v0, v1, v2);
    }
}

/// Copy the rectangle's shading source onto every corner
///
/// Rectangles have one color for the whole primitive, taken from the
/// second input corner.
pub fn broadcast_rect_colors(source: &VertexData, corners: &mut [VertexData]) {
    for corner in corners {
        corner.color0 = source.color0;
        corner.color1 = source.color1;
    }
}
