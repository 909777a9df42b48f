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

//! Depth-bounds filter
//!
//! Trivially rejects lines, triangles and rectangles whose depth lies beyond
//! the valid range.
//!
//! # Policy
//!
//! - Depth clamp off: reject if any vertex is outside, in either direction.
//! - Depth clamp on: reject only if every vertex is outside in the same
//!   direction.

use super::super::state::RenderState;
use super::super::types::ClipCoords;

/// Normalized depth at or beyond which a vertex counts as outside
///
/// Slightly above 1.0 (1 + 2^-15) to absorb float slack from the transform.
pub const OUTSIDE_Z: f32 = 1.000030517578125;

/// Depth classification of a single vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthClass {
    Inside,
    /// `z / w >= OUTSIDE_Z`
    PositiveOutside,
    /// `-z / w >= OUTSIDE_Z`
    NegativeOutside,
}

impl DepthClass {
    /// Classify a clip-space position
    ///
    /// NaN depth compares false both ways and classifies as inside.
    #[inline]
    pub fn of(p: &ClipCoords) -> Self {
        let z = p.depth();
        if z >= OUTSIDE_Z {
            DepthClass::PositiveOutside
        } else if -z >= OUTSIDE_Z {
            DepthClass::NegativeOutside
        } else {
            DepthClass::Inside
        }
    }
}

/// Outside counts of a vertex set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthCounts {
    pub positive: usize,
    pub negative: usize,
    pub total: usize,
}

impl DepthCounts {
    pub fn tally(points: &[ClipCoords]) -> Self {
        let mut counts = DepthCounts {
            total: points.len(),
            ..Default::default()
        };
        for p in points {
            match DepthClass::of(p) {
                DepthClass::PositiveOutside => counts.positive += 1,
                DepthClass::NegativeOutside => counts.negative += 1,
                DepthClass::Inside => {}
            }
        }
        counts
    }
}

/// Whether a primitive with these vertices is discarded by depth
///
/// Not used for points.
pub fn depth_culled(state: &RenderState, points: &[ClipCoords]) -> bool {
    let counts = DepthCounts::tally(points);

    if counts.positive + counts.negative > 0 && !state.depth_clamp {
        return true;
    }

    counts.total > 0 && (counts.positive >= counts.total || counts.negative >= counts.total)
}
