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

//! PSP graphics engine geometry stage
//!
//! This library provides the stage of a PSP software renderer that sits
//! between vertex transform and rasterization: depth-bounds filtering,
//! near-plane clipping, polygon re-triangulation, rectangle decomposition
//! and flat-shading correction.
//!
//! # Example
//!
//! ```
//! use pspge::core::ge::{ClipCoords, Clipper, PrimitiveLog, RenderState, VertexData, Viewport};
//!
//! let state = RenderState {
//!     depth_clamp: true,
//!     ..Default::default()
//! };
//! let viewport = Viewport::default();
//! let clipper = Clipper::new(&state, &viewport);
//!
//! // A line crossing the near plane is shortened to the crossing point
//! let near = VertexData::at_clip(ClipCoords::new(0.0, 0.0, 0.0, 1.0));
//! let behind = VertexData::at_clip(ClipCoords::new(0.0, 0.0, -3.0, 2.0));
//!
//! let mut log = PrimitiveLog::new();
//! clipper.process_line(&behind, &near, &mut log);
//!
//! let [a, _] = log.lines().next().unwrap();
//! assert_eq!(a.clip_pos.z, -1.5);
//! assert_eq!(a.clip_pos.w, 1.5);
//! ```

pub mod core;
