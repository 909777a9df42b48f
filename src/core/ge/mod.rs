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

//! GE (Graphics Engine) geometry stage
//!
//! This module implements the stage of the PSP software renderer that sits
//! between vertex transform and rasterization:
//! - Depth-bounds rejection of primitives outside the depth range
//! - Near-plane clipping of lines and triangles in homogeneous clip space
//! - Fan re-triangulation of clipped polygons
//! - Rectangle (sprite) decomposition, including through-mode rectangles
//! - Flat-shading color correction
//!
//! # Data Flow
//!
//! ```text
//! transform stage ──> Clipper ──> Binner (binning / rasterization)
//!                        │
//!                        └── Projector (re-projection of moved vertices)
//! ```
//!
//! The clipper reads the [`RenderState`] and its input vertices, and writes
//! only to the [`Binner`]. It keeps no state between calls.
//!
//! # Coordinate Spaces
//!
//! - Clip space: homogeneous `(x, y, z, w)`. A point is in front of the near
//!   plane when `z >= -w`.
//! - Screen space: `(x, y, z)` after the perspective divide and viewport
//!   transform. In through mode vertices arrive in screen space directly.

mod binner;
mod clipper;
mod primitive;
mod projection;
mod state;
mod types;
mod vertex;

// Public re-exports
pub use binner::{BinnedPrimitive, Binner, PrimitiveLog};
pub use clipper::*;
pub use primitive::{Primitive, Provoking};
pub use projection::{Projector, Viewport};
pub use state::{RenderState, ShadeMode};
pub use types::*;
pub use vertex::VertexData;
