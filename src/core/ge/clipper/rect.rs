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

//! Rectangle decomposition
//!
//! A rectangle primitive is two opposite corners. The second corner supplies
//! color, depth and fog for the whole rectangle. The other two corners are
//! built by crossing the inputs' X and Y:
//!
//! ```text
//!   corner 0: (v0.x, v0.y)  uv (v0.s, v0.t)
//!   corner 1: (v0.x, v1.y)  uv (v0.s, v1.t)
//!   corner 2: (v1.x, v0.y)  uv (v1.s, v0.t)
//!   corner 3: v1
//! ```
//!
//! The corners are not given in any particular screen order, so they are
//! sorted into top-left/top-right/bottom-left/bottom-right before emitting.
//! Each half of the quad is emitted in both windings; the binner's back-face
//! culling keeps exactly one of each pair.

use super::super::binner::Binner;
use super::super::projection::Projector;
use super::super::types::{ClipCoords, ScreenCoords, TexCoords};
use super::super::vertex::VertexData;
use super::depth::depth_culled;
use super::shading::broadcast_rect_colors;
use super::Clipper;

/// Indices of the sorted corners within the corner buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Corners {
    pub top_left: usize,
    pub top_right: usize,
    pub bottom_left: usize,
    pub bottom_right: usize,
}

impl Corners {
    /// Sort corners by position, starting from construction order
    ///
    /// A candidate is only replaced by a corner that is strictly better on
    /// both axes, so degenerate rectangles keep construction order.
    pub(super) fn sort(buf: &[VertexData; 4], pos: impl Fn(&VertexData) -> (f32, f32)) -> Self {
        let mut corners = Corners {
            top_left: 0,
            top_right: 1,
            bottom_left: 2,
            bottom_right: 3,
        };

        for (i, v) in buf.iter().enumerate() {
            let (x, y) = pos(v);

            let (tl_x, tl_y) = pos(&buf[corners.top_left]);
            if x < tl_x && y < tl_y {
                corners.top_left = i;
            }
            let (tr_x, tr_y) = pos(&buf[corners.top_right]);
            if x > tr_x && y < tr_y {
                corners.top_right = i;
            }
            let (bl_x, bl_y) = pos(&buf[corners.bottom_left]);
            if x < bl_x && y > bl_y {
                corners.bottom_left = i;
            }
            let (br_x, br_y) = pos(&buf[corners.bottom_right]);
            if x > br_x && y > br_y {
                corners.bottom_right = i;
            }
        }

        corners
    }
}

/// Swap the UVs of the off-diagonal corners when the diagonal is mirrored
///
/// `from` and `to` span the reference diagonal. If one axis increases while
/// the other decreases along it (compared at integer precision), the naive
/// corner construction mirrors the texture, so the top-right and bottom-left
/// texture coordinates trade places.
pub(super) fn rotate_uv(
    from: &ScreenCoords,
    to: &ScreenCoords,
    buf: &mut [VertexData; 4],
    top_right: usize,
    bottom_left: usize,
) {
    let (x1, y1) = (from.x as i32, from.y as i32);
    let (x2, y2) = (to.x as i32, to.y as i32);

    if (x1 < x2 && y1 > y2) || (x1 > x2 && y1 < y2) {
        let tr = buf[top_right].tex_coords;
        buf[top_right].tex_coords = buf[bottom_left].tex_coords;
        buf[bottom_left].tex_coords = tr;
    }
}

impl<P: Projector + ?Sized> Clipper<'_, P> {
    /// Decompose a rectangle primitive
    pub fn process_rect<B: Binner + ?Sized>(
        &self,
        v0: &VertexData,
        v1: &VertexData,
        binner: &mut B,
    ) {
        if self.state.through_mode {
            self.process_rect_through(v0, v1, binner);
        } else {
            self.process_rect_perspective(v0, v1, binner);
        }
    }

    /// Rectangle with clip-space corners
    fn process_rect_perspective<B: Binner + ?Sized>(
        &self,
        v0: &VertexData,
        v1: &VertexData,
        binner: &mut B,
    ) {
        if depth_culled(self.state, &[v0.clip_pos, v1.clip_pos]) {
            log::trace!("rectangle discarded by depth bounds");
            return;
        }

        let (z, w) = (v1.clip_pos.z, v1.clip_pos.w);
        let corner = |x: f32, y: f32, tex_coords: TexCoords| {
            let clip_pos = ClipCoords::new(x, y, z, w);
            VertexData {
                clip_pos,
                screen_pos: self.projector.clip_to_screen(&clip_pos),
                tex_coords,
                ..Default::default()
            }
        };

        let mut buf = [
            corner(v0.clip_pos.x, v0.clip_pos.y, v0.tex_coords),
            corner(
                v0.clip_pos.x,
                v1.clip_pos.y,
                TexCoords::new(v0.tex_coords.s, v1.tex_coords.t),
            ),
            corner(
                v1.clip_pos.x,
                v0.clip_pos.y,
                TexCoords::new(v1.tex_coords.s, v0.tex_coords.t),
            ),
            *v1,
        ];

        broadcast_rect_colors(v1, &mut buf);
        for v in &mut buf {
            v.fog_depth = v1.fog_depth;
        }

        let c = Corners::sort(&buf, |v| (v.clip_pos.x, v.clip_pos.y));
        let (tl_screen, br_screen) = (buf[c.top_left].screen_pos, buf[c.bottom_right].screen_pos);
        rotate_uv(&tl_screen, &br_screen, &mut buf, c.top_right, c.bottom_left);

        let (tl, tr, bl, br) = (
            &buf[c.top_left],
            &buf[c.top_right],
            &buf[c.bottom_left],
            &buf[c.bottom_right],
        );
        binner.add_triangle(tl, tr, br);
        binner.add_triangle(br, tr, tl);
        binner.add_triangle(br, bl, tl);
        binner.add_triangle(tl, bl, br);
    }

    /// Rectangle with screen-space corners
    fn process_rect_through<B: Binner + ?Sized>(
        &self,
        v0: &VertexData,
        v1: &VertexData,
        binner: &mut B,
    ) {
        if binner.rectangle_fast_path(v0, v1) {
            log::trace!("rectangle taken by the fast path");
            return;
        }

        let z = v1.screen_pos.z;
        let corner = |x: f32, y: f32, tex_coords: TexCoords| VertexData {
            screen_pos: ScreenCoords::new(x, y, z),
            tex_coords,
            ..Default::default()
        };

        let mut buf = [
            corner(v0.screen_pos.x, v0.screen_pos.y, v0.tex_coords),
            corner(
                v0.screen_pos.x,
                v1.screen_pos.y,
                TexCoords::new(v0.tex_coords.s, v1.tex_coords.t),
            ),
            corner(
                v1.screen_pos.x,
                v0.screen_pos.y,
                TexCoords::new(v1.tex_coords.s, v0.tex_coords.t),
            ),
            *v1,
        ];

        broadcast_rect_colors(v1, &mut buf);
        for v in &mut buf {
            v.clip_pos.w = 1.0;
            v.fog_depth = 1.0;
        }

        let c = Corners::sort(&buf, |v| (v.screen_pos.x, v.screen_pos.y));
        rotate_uv(&v0.screen_pos, &v1.screen_pos, &mut buf, c.top_right, c.bottom_left);

        if self.state.clears_as_rect() {
            binner.add_clear_rect(v0, v1);
            return;
        }

        let (tl, tr, bl, br) = (
            &buf[c.top_left],
            &buf[c.top_right],
            &buf[c.bottom_left],
            &buf[c.bottom_right],
        );
        binner.add_triangle(tl, tr, bl);
        binner.add_triangle(bl, tr, tl);
        binner.add_triangle(tr, br, bl);
        binner.add_triangle(bl, br, tr);
    }
}
