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

//! Primitive clipper
//!
//! Sits between the transform stage and the binner. Every call takes one
//! primitive in clip space (or screen space, in through mode) and emits zero
//! or more screen-ready primitives:
//!
//! - Points pass through untouched.
//! - Lines and triangles are depth-bounds filtered, then clipped against the
//!   near plane. Triangles that need clipping are re-triangulated as a fan.
//! - Rectangles are decomposed into four corners and four triangles, or
//!   handed to the binner's fast path / clear fill in through mode.
//!
//! Discarding a primitive is a routine outcome, not an error; the clipper
//! never fails.
//!
//! # Hardware notes
//!
//! The hardware clips against the near plane only (`z >= -w`), regardless of
//! the viewport. X/Y bounds are enforced later by the rasterizer.

mod depth;
mod plane;
mod polygon;
mod rect;
mod shading;
#[cfg(test)]
mod tests;

pub use depth::{depth_culled, DepthClass, DepthCounts, OUTSIDE_Z};
pub use plane::{different_signs, ClipMask, ClipPlane};
pub use polygon::{
    clip_polygon, IndexList, PolygonClip, VertexArena, MAX_CLIPPED_VERTICES, MAX_POLYGON_INDICES,
};
pub use shading::ProvokingColors;

use super::binner::Binner;
use super::primitive::{Primitive, Provoking};
use super::projection::Projector;
use super::state::RenderState;
use super::vertex::VertexData;

/// Geometry clipper bound to one render state and projector
///
/// Holds only shared references, so it is cheap to copy and each call is
/// independent. All scratch storage lives on the stack of the call.
///
/// # Examples
///
/// ```
/// use pspge::core::ge::{ClipCoords, Clipper, PrimitiveLog, RenderState, VertexData, Viewport};
///
/// let state = RenderState::default();
/// let viewport = Viewport::default();
/// let clipper = Clipper::new(&state, &viewport);
///
/// let mut log = PrimitiveLog::new();
/// let v = |x, y| VertexData::at_clip(ClipCoords::new(x, y, 0.0, 1.0));
/// clipper.process_triangle(&v(0.0, 0.0), &v(1.0, 0.0), &v(0.0, 1.0), &Default::default(), &mut log);
///
/// assert_eq!(log.triangles().count(), 1);
/// ```
pub struct Clipper<'a, P: Projector + ?Sized> {
    state: &'a RenderState,
    projector: &'a P,
}

impl<P: Projector + ?Sized> Clone for Clipper<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Projector + ?Sized> Copy for Clipper<'_, P> {}

impl<'a, P: Projector + ?Sized> Clipper<'a, P> {
    pub fn new(state: &'a RenderState, projector: &'a P) -> Self {
        Self { state, projector }
    }

    /// Recompute `v.screen_pos` from `v.clip_pos`
    #[inline]
    fn reproject(&self, v: &mut VertexData) {
        v.screen_pos = self.projector.clip_to_screen(&v.clip_pos);
    }

    /// Process one primitive of any kind
    pub fn process<B: Binner + ?Sized>(&self, primitive: &Primitive, binner: &mut B) {
        match primitive {
            Primitive::Point { vertex } => self.process_point(vertex, binner),
            Primitive::Line { vertices: [v0, v1] } => self.process_line(v0, v1, binner),
            Primitive::Triangle {
                vertices: [v0, v1, v2],
                provoking,
            } => self.process_triangle(v0, v1, v2, provoking, binner),
            Primitive::Rectangle { vertices: [v0, v1] } => self.process_rect(v0, v1, binner),
        }
    }

    /// Process a sequence of primitives in order
    pub fn process_all<'p, B, I>(&self, primitives: I, binner: &mut B)
    where
        B: Binner + ?Sized,
        I: IntoIterator<Item = &'p Primitive>,
    {
        for primitive in primitives {
            self.process(primitive, binner);
        }
    }

    /// Points need no clipping; the rasterizer bounds-checks them.
    pub fn process_point<B: Binner + ?Sized>(&self, v0: &VertexData, binner: &mut B) {
        binner.add_point(v0);
    }

    /// Depth-filter a line and clip it against the near plane
    pub fn process_line<B: Binner + ?Sized>(
        &self,
        v0: &VertexData,
        v1: &VertexData,
        binner: &mut B,
    ) {
        if self.state.through_mode {
            binner.add_line(v0, v1);
            return;
        }

        if depth_culled(self.state, &[v0.clip_pos, v1.clip_pos]) {
            log::trace!("line discarded by depth bounds");
            return;
        }

        let plane = ClipPlane::NEAR;
        let mask0 = ClipMask::of(&v0.clip_pos);
        let mask1 = ClipMask::of(&v1.clip_pos);

        if !(mask0 | mask1).intersects(plane.bit) {
            binner.add_line(v0, v1);
            return;
        }

        if (mask0 & mask1).intersects(plane.bit) {
            log::trace!("line entirely behind the near plane");
            return;
        }

        // Exactly one endpoint is outside. Walk from v1 toward v0 to the
        // plane crossing and move the outside endpoint there.
        let d0 = plane.dist(v0);
        let d1 = plane.dist(v1);
        let t = d1 / (d1 - d0);
        let crossing = VertexData::lerp(t, v1, v0);

        let (mut a, mut b) = if mask0.intersects(plane.bit) {
            (crossing, *v1)
        } else {
            (*v0, crossing)
        };

        self.reproject(&mut a);
        self.reproject(&mut b);
        binner.add_line(&a, &b);
    }

    /// Depth-filter a triangle, clip it against the near plane and emit the
    /// resulting fan with flat-shading correction
    pub fn process_triangle<B: Binner + ?Sized>(
        &self,
        v0: &VertexData,
        v1: &VertexData,
        v2: &VertexData,
        provoking: &Provoking,
        binner: &mut B,
    ) {
        let mut mask = ClipMask::empty();
        if !self.state.through_mode {
            mask = ClipMask::union_of([&v0.clip_pos, &v1.clip_pos, &v2.clip_pos]);

            if depth_culled(self.state, &[v0.clip_pos, v1.clip_pos, v2.clip_pos]) {
                log::trace!("triangle discarded by depth bounds");
                return;
            }
        }

        let colors = ProvokingColors::resolve(provoking, v0, v1, v2);

        // No clipping is the common case
        if !mask.intersects(ClipMask::NEG_Z) {
            shading::emit_triangle(self.state, v0, v1, v2, &colors, binner);
            return;
        }

        let mut arena = VertexArena::from_triangle(v0, v1, v2);
        let mut poly = IndexList::triangle();
        let mut scratch = IndexList::new();

        let synthesized = match clip_polygon(&ClipPlane::NEAR, &mut arena, &mut poly, &mut scratch) {
            PolygonClip::Kept { synthesized } => synthesized,
            PolygonClip::Collapsed => {
                log::trace!("triangle clipped away by the near plane");
                return;
            }
        };

        if synthesized {
            for &index in poly.as_slice() {
                self.reproject(arena.get_mut(index));
            }
        }

        for [a, b, c] in poly.fan() {
            shading::emit_triangle(
                self.state,
                arena.get(a),
                arena.get(b),
                arena.get(c),
                &colors,
                binner,
            );
        }
    }
}
