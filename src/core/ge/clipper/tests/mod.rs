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

//! Clipper tests
//!
//! Tests are organized into the following modules:
//! - `depth`: Depth-bounds filter (clamp on/off, outside directions)
//! - `polygon`: Single-plane polygon clipping and fan triangulation
//! - `line`: Line passthrough and near-plane clipping
//! - `triangle`: Triangle near-plane clipping and re-triangulation
//! - `rect`: Rectangle decomposition, clear fill and fast path
//! - `shading`: Flat-shading provoking color correction
//! - `properties`: Property-based checks over random geometry


use crate::core::ge::{
    ClipCoords, Clipper, Color, PrimitiveLog, Projector, RenderState, ScreenCoords, VertexData,
    Viewport,
};

/// Vertex at a clip-space position, with a screen position projected by
/// the default viewport
pub(super) fn clip_vertex(x: f32, y: f32, z: f32, w: f32) -> VertexData {
    let clip_pos = ClipCoords::new(x, y, z, w);
    VertexData {
        clip_pos,
        screen_pos: Viewport::default().clip_to_screen(&clip_pos),
        ..Default::default()
    }
}

/// Through-mode vertex at a screen position
pub(super) fn screen_vertex(x: f32, y: f32, z: f32) -> VertexData {
    VertexData::at_screen(ScreenCoords::new(x, y, z))
}

/// Copy of `v` with both colors set
pub(super) fn colored(v: VertexData, color0: Color, color1: Color) -> VertexData {
    VertexData {
        color0,
        color1,
        ..v
    }
}

/// Render state with depth clamping on, so near-plane crossings are not
/// rejected by the depth filter first
pub(super) fn clamped() -> RenderState {
    RenderState {
        depth_clamp: true,
        ..Default::default()
    }
}

pub(super) fn through() -> RenderState {
    RenderState {
        through_mode: true,
        ..Default::default()
    }
}

/// Run `f` against a clipper using the default viewport and collect the
/// output
pub(super) fn run(
    state: RenderState,
    f: impl FnOnce(&Clipper<'_, Viewport>, &mut PrimitiveLog),
) -> PrimitiveLog {
    let viewport = Viewport::default();
    let clipper = Clipper::new(&state, &viewport);
    let mut log = PrimitiveLog::new();
    f(&clipper, &mut log);
    log
}

/// Twice the signed screen-space area of a triangle
pub(super) fn signed_area(tri: &[VertexData; 3]) -> f32 {
    let [a, b, c] = tri.map(|v| v.screen_pos);
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Near-plane distance of a vertex (`z + w`)
pub(super) fn near_dist(v: &VertexData) -> f32 {
    v.clip_pos.z + v.clip_pos.w
}

pub(super) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= 1e-4 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}
