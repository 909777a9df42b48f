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

//! Custom assertions for geometry stage testing

use pspge::core::ge::{Projector, VertexData, Viewport};

/// Assert a vertex is on or in front of the near plane
#[allow(dead_code)]
pub fn assert_in_front(v: &VertexData) {
    let dist = v.clip_pos.z + v.clip_pos.w;
    assert!(
        dist >= -1e-5,
        "Vertex behind near plane: clip_pos {:?} (z + w = {})",
        v.clip_pos,
        dist
    );
}

/// Assert a vertex's screen position matches its clip position
#[allow(dead_code)]
pub fn assert_projected(v: &VertexData, viewport: &Viewport) {
    let expected = viewport.clip_to_screen(&v.clip_pos);
    assert_eq!(
        v.screen_pos, expected,
        "Screen position mismatch for clip_pos {:?}",
        v.clip_pos
    );
}

/// Twice the signed screen-space area of a triangle
#[allow(dead_code)]
pub fn signed_area(tri: &[VertexData; 3]) -> f32 {
    let [a, b, c] = tri.map(|v| v.screen_pos);
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}
