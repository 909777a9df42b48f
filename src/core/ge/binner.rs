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

//! Binning consumer interface
//!
//! The clipper hands finished, screen-ready primitives to a [`Binner`]. The
//! binner owns everything downstream: back-face culling, tile binning, scan
//! conversion, depth test, blending. The clipper only ever appends.
//!
//! [`PrimitiveLog`] is a recording binner that keeps every primitive it
//! receives, used by the command-line tool and the tests.

use serde::{Deserialize, Serialize};

use super::vertex::VertexData;

/// Append-only sink for finished primitives
pub trait Binner {
    fn add_point(&mut self, v0: &VertexData);

    fn add_line(&mut self, v0: &VertexData, v1: &VertexData);

    /// Winding order is significant; the binner culls back faces itself.
    fn add_triangle(&mut self, v0: &VertexData, v1: &VertexData, v2: &VertexData);

    /// Direct clear fill between two through-mode corners
    fn add_clear_rect(&mut self, v0: &VertexData, v1: &VertexData);

    /// Offer a through-mode rectangle to an optimized axis-aligned fill
    ///
    /// Returns `true` if the rectangle was fully handled. The default
    /// implementation declines, so the clipper decomposes it into triangles.
    fn rectangle_fast_path(&mut self, _v0: &VertexData, _v1: &VertexData) -> bool {
        false
    }
}

/// A primitive as received by a [`PrimitiveLog`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "vertices", rename_all = "snake_case")]
pub enum BinnedPrimitive {
    Point(VertexData),
    Line([VertexData; 2]),
    Triangle([VertexData; 3]),
    ClearRect([VertexData; 2]),
    /// Rectangle accepted by the fast path
    FastRect([VertexData; 2]),
}

/// Recording binner
///
/// # Examples
///
/// ```
/// use pspge::core::ge::{Binner, PrimitiveLog, VertexData};
///
/// let mut log = PrimitiveLog::new();
/// log.add_point(&VertexData::default());
/// assert_eq!(log.points().count(), 1);
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PrimitiveLog {
    primitives: Vec<BinnedPrimitive>,

    /// Accept through-mode rectangles on the fast path
    fast_path: bool,
}

impl PrimitiveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the rectangle fast path
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    /// All primitives in submission order
    pub fn primitives(&self) -> &[BinnedPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<BinnedPrimitive> {
        self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn points(&self) -> impl Iterator<Item = &VertexData> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            BinnedPrimitive::Point(v) => Some(v),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &[VertexData; 2]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            BinnedPrimitive::Line(vs) => Some(vs),
            _ => None,
        })
    }

    pub fn triangles(&self) -> impl Iterator<Item = &[VertexData; 3]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            BinnedPrimitive::Triangle(vs) => Some(vs),
            _ => None,
        })
    }

    pub fn clear_rects(&self) -> impl Iterator<Item = &[VertexData; 2]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            BinnedPrimitive::ClearRect(vs) => Some(vs),
            _ => None,
        })
    }

    pub fn fast_rects(&self) -> impl Iterator<Item = &[VertexData; 2]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            BinnedPrimitive::FastRect(vs) => Some(vs),
            _ => None,
        })
    }
}

impl Binner for PrimitiveLog {
    fn add_point(&mut self, v0: &VertexData) {
        self.primitives.push(BinnedPrimitive::Point(*v0));
    }

    fn add_line(&mut self, v0: &VertexData, v1: &VertexData) {
        self.primitives.push(BinnedPrimitive::Line([*v0, *v1]));
    }

    fn add_triangle(&mut self, v0: &VertexData, v1: &VertexData, v2: &VertexData) {
        self.primitives
            .push(BinnedPrimitive::Triangle([*v0, *v1, *v2]));
    }

    fn add_clear_rect(&mut self, v0: &VertexData, v1: &VertexData) {
        self.primitives.push(BinnedPrimitive::ClearRect([*v0, *v1]));
    }

    fn rectangle_fast_path(&mut self, v0: &VertexData, v1: &VertexData) -> bool {
        if self.fast_path {
            self.primitives.push(BinnedPrimitive::FastRect([*v0, *v1]));
        }
        self.fast_path
    }
}

/// Binners are commonly borrowed by the submitting stage
impl<B: Binner + ?Sized> Binner for &mut B {
    fn add_point(&mut self, v0: &VertexData) {
        (**self).add_point(v0);
    }

    fn add_line(&mut self, v0: &VertexData, v1: &VertexData) {
        (**self).add_line(v0, v1);
    }

    fn add_triangle(&mut self, v0: &VertexData, v1: &VertexData, v2: &VertexData) {
        (**self).add_triangle(v0, v1, v2);
    }

    fn add_clear_rect(&mut self, v0: &VertexData, v1: &VertexData) {
        (**self).add_clear_rect(v0, v1);
    }

    fn rectangle_fast_path(&mut self, v0: &VertexData, v1: &VertexData) -> bool {
        (**self).rectangle_fast_path(v0, v1)
    }
}
