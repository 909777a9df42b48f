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

//! Primitive submission units
//!
//! One [`Primitive`] is one call into the clipper.

use serde::{Deserialize, Serialize};

use super::types::Color;
use super::vertex::VertexData;

/// Source of the flat-shading colors of a triangle
///
/// Either one of the triangle's own corners, or a vertex outside the
/// triangle (e.g. the first vertex of a strip) carried by its colors alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provoking {
    V0,
    V1,
    #[default]
    V2,
    Detached { color0: Color, color1: Color },
}

impl Provoking {
    /// Resolve the provoking colors against the triangle's corners
    ///
    /// Returns `(color0, color1)`.
    pub fn colors(&self, vertices: [&VertexData; 3]) -> (Color, Color) {
        let v = match *self {
            Provoking::V0 => vertices[0],
            Provoking::V1 => vertices[1],
            Provoking::V2 => vertices[2],
            Provoking::Detached { color0, color1 } => return (color0, color1),
        };
        (v.color0, v.color1)
    }
}

impl From<&VertexData> for Provoking {
    fn from(v: &VertexData) -> Self {
        Provoking::Detached {
            color0: v.color0,
            color1: v.color1,
        }
    }
}

/// A single primitive submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Point {
        vertex: VertexData,
    },
    Line {
        vertices: [VertexData; 2],
    },
    Triangle {
        vertices: [VertexData; 3],
        #[serde(default)]
        provoking: Provoking,
    },
    /// Two opposite corners; the second supplies color, depth and fog
    Rectangle {
        vertices: [VertexData; 2],
    },
}

impl Primitive {
    /// Number of vertices submitted
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Point { .. } => 1,
            Primitive::Line { .. } | Primitive::Rectangle { .. } => 2,
            Primitive::Triangle { .. } => 3,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Point { .. } => "point",
            Primitive::Line { .. } => "line",
            Primitive::Triangle { .. } => "triangle",
            Primitive::Rectangle { .. } => "rectangle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provoking_corner_colors() {
        let mut vs = [VertexData::default(); 3];
        vs[1].color0 = Color::new(1, 2, 3, 4);
        vs[1].color1 = Color::new(5, 6, 7, 0);

        let (c0, c1) = Provoking::V1.colors([&vs[0], &vs[1], &vs[2]]);
        assert_eq!(c0, Color::new(1, 2, 3, 4));
        assert_eq!(c1, Color::new(5, 6, 7, 0));
    }

    #[test]
    fn test_provoking_detached_colors() {
        let vs = [VertexData::default(); 3];
        let mut outside = VertexData::default();
        outside.color0 = Color::new(9, 9, 9, 9);

        let provoking = Provoking::from(&outside);
        let (c0, _) = provoking.colors([&vs[0], &vs[1], &vs[2]]);
        assert_eq!(c0, Color::new(9, 9, 9, 9));
    }

    #[test]
    fn test_primitive_deserialize_defaults() {
        let json = r#"{
            "type": "triangle",
            "vertices": [
                { "clip_pos": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 } },
                { "clip_pos": { "x": 1.0, "y": 0.0, "z": 0.0, "w": 1.0 } },
                { "clip_pos": { "x": 0.0, "y": 1.0, "z": 0.0, "w": 1.0 } }
            ]
        }"#;
        let prim: Primitive = serde_json::from_str(json).unwrap();
        match prim {
            Primitive::Triangle { vertices, provoking } => {
                assert_eq!(provoking, Provoking::V2);
                assert_eq!(vertices[1].clip_pos.x, 1.0);
                assert_eq!(vertices[1].fog_depth, 0.0);
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn test_kind_and_vertex_count() {
        let v = VertexData::default();
        let cases = [
            (Primitive::Point { vertex: v }, "point", 1),
            (Primitive::Line { vertices: [v; 2] }, "line", 2),
            (
                Primitive::Triangle {
                    vertices: [v; 3],
                    provoking: Provoking::V2,
                },
                "triangle",
                3,
            ),
            (Primitive::Rectangle { vertices: [v; 2] }, "rectangle", 2),
        ];
        for (primitive, kind, count) in cases {
            assert_eq!(primitive.kind(), kind);
            assert_eq!(primitive.vertex_count(), count);
        }
    }
}
