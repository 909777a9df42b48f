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

//! Geometry stage type definitions
//!
//! This module contains the coordinate and color types carried by every vertex
//! that flows through the geometry stage: homogeneous clip coordinates, screen
//! coordinates, texture coordinates, and 8-bit colors.

use serde::{Deserialize, Serialize};

/// Linear interpolation of a single scalar
#[inline(always)]
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// A homogeneous coordinate in clip space
///
/// Positions are in clip space before the perspective divide. A point is in
/// front of the near plane when `z >= -w`.
///
/// # Examples
///
/// ```
/// use pspge::core::ge::ClipCoords;
///
/// let p = ClipCoords::new(1.0, 2.0, -0.5, 1.0);
/// assert_eq!(p.depth(), -0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipCoords {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipCoords {
    /// Create clip coordinates from components
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Normalized depth (`z / w`)
    ///
    /// No guard against `w == 0`; the result may be infinite or NaN and is
    /// classified by the caller like any other value.
    #[inline(always)]
    pub fn depth(&self) -> f32 {
        self.z / self.w
    }

    /// Component-wise linear interpolation from `self` toward `other`
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, other.x, t),
            y: lerp_f32(self.y, other.y, t),
            z: lerp_f32(self.z, other.z, t),
            w: lerp_f32(self.w, other.w, t),
        }
    }
}

/// A device coordinate after projection
///
/// `x` and `y` are screen positions, `z` is the depth value handed to the
/// depth test. In through mode these are supplied directly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenCoords {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScreenCoords {
    /// Create screen coordinates from components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise linear interpolation from `self` toward `other`
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, other.x, t),
            y: lerp_f32(self.y, other.y, t),
            z: lerp_f32(self.z, other.z, t),
        }
    }
}

/// Texture coordinate (S, T)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TexCoords {
    pub s: f32,
    pub t: f32,
}

impl TexCoords {
    pub const fn new(s: f32, t: f32) -> Self {
        Self { s, t }
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            s: lerp_f32(self.s, other.s, t),
            t: lerp_f32(self.t, other.t, t),
        }
    }
}

/// A 32-bit RGBA color
///
/// Used for both the primary (`color0`) and secondary (`color1`) vertex
/// colors. The secondary color only carries RGB; its alpha channel is
/// interpolated but never consumed.
///
/// # Examples
///
/// ```
/// use pspge::core::ge::Color;
///
/// let c = Color::from_u32(0x80FF4020);
/// assert_eq!(c.r, 0x20);
/// assert_eq!(c.g, 0x40);
/// assert_eq!(c.b, 0xFF);
/// assert_eq!(c.a, 0x80);
/// assert_eq!(c.to_u32(), 0x80FF4020);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    #[serde(default)]
    pub a: u8,
}

impl Color {
    /// Fixed-point scale of the color blend factor
    pub const LERP_ONE: i32 = 256;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a Color from a packed `0xAABBGGRR` word
    pub fn from_u32(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
            a: ((value >> 24) & 0xFF) as u8,
        }
    }

    /// Pack into a `0xAABBGGRR` word
    pub fn to_u32(&self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// Blend toward `other` by `t`, using an 8-bit fixed-point factor
    ///
    /// The factor is truncated to 1/256 steps before blending, so `t = 1.0`
    /// lands exactly on `other` and `t = 0.0` leaves `self` unchanged.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t_int = (t * Self::LERP_ONE as f32) as u16 as i32;
        let channel = |a: u8, b: u8| -> u8 {
            let a = a as i32;
            let b = b as i32;
            (a + (b - a) * t_int / Self::LERP_ONE).clamp(0, 255) as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: channel(self.a, other.a),
        }
    }
}
