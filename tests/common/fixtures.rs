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

//! Test fixtures for common test scenarios

use std::path::PathBuf;

use pspge::core::ge::{ClipCoords, Color, Projector, ScreenCoords, VertexData, Viewport};
use tempfile::TempDir;

/// Vertex at a clip-space position with its default-viewport projection
#[allow(dead_code)]
pub fn clip_vertex(x: f32, y: f32, z: f32, w: f32) -> VertexData {
    let clip_pos = ClipCoords::new(x, y, z, w);
    VertexData {
        clip_pos,
        screen_pos: Viewport::default().clip_to_screen(&clip_pos),
        ..Default::default()
    }
}

/// Through-mode vertex with a color
#[allow(dead_code)]
pub fn screen_vertex(x: f32, y: f32, color: Color) -> VertexData {
    VertexData {
        color0: color,
        ..VertexData::at_screen(ScreenCoords::new(x, y, 0.0))
    }
}

/// Scene with one primitive of every kind, partly behind the near plane
#[allow(dead_code)]
pub const MIXED_SCENE: &str = r#"{
    "primitives": [
        { "type": "point", "vertex": { "clip_pos": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 } } },
        {
            "type": "line",
            "vertices": [
                { "clip_pos": { "x": 0.0, "y": 0.0, "z": -2.0, "w": 1.0 } },
                { "clip_pos": { "x": 1.0, "y": 1.0, "z": 0.0, "w": 1.0 } }
            ]
        },
        {
            "type": "triangle",
            "vertices": [
                { "clip_pos": { "x": 0.0, "y": 0.0, "z": -2.0, "w": 1.0 },
                  "color0": { "r": 255, "g": 0, "b": 0, "a": 255 } },
                { "clip_pos": { "x": 1.0, "y": 0.0, "z": 0.0, "w": 1.0 },
                  "color0": { "r": 0, "g": 255, "b": 0, "a": 255 } },
                { "clip_pos": { "x": 0.0, "y": 1.0, "z": 0.0, "w": 1.0 },
                  "color0": { "r": 0, "g": 0, "b": 255, "a": 255 } }
            ],
            "provoking": "v0"
        },
        {
            "type": "rectangle",
            "vertices": [
                { "clip_pos": { "x": -0.5, "y": -0.5, "z": 0.0, "w": 1.0 } },
                { "clip_pos": { "x": 0.5, "y": 0.5, "z": 0.0, "w": 1.0 },
                  "color0": { "r": 10, "g": 20, "b": 30, "a": 40 } }
            ]
        }
    ]
}"#;

/// Scene of through-mode sprites
#[allow(dead_code)]
pub const SPRITE_SCENE: &str = r#"{
    "primitives": [
        {
            "type": "rectangle",
            "vertices": [
                { "screen_pos": { "x": 0.0, "y": 0.0, "z": 0.0 }, "clip_pos": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 } },
                { "screen_pos": { "x": 480.0, "y": 272.0, "z": 0.0 }, "clip_pos": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 } }
            ]
        },
        {
            "type": "rectangle",
            "vertices": [
                { "screen_pos": { "x": 16.0, "y": 16.0, "z": 0.0 }, "tex_coords": { "s": 0.0, "t": 0.0 } },
                { "screen_pos": { "x": 48.0, "y": 32.0, "z": 0.0 }, "tex_coords": { "s": 32.0, "t": 16.0 } }
            ]
        }
    ]
}"#;

/// Write `contents` to `name` inside a fresh temporary directory
///
/// The directory is removed when the returned guard is dropped.
#[allow(dead_code)]
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
