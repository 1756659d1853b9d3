// Copyright 2025 Dustin McAfee
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

//! Shared color type and byte-level pixel helpers.

use bytes::BufMut;
use std::fmt;

/// Bytes per pixel of an RGBA32 framebuffer.
pub const RGBA32_BYTES: usize = 4;

/// Bytes per pixel of a packed RGB24 buffer.
pub const RGB24_BYTES: usize = 3;

/// A 24-bit RGB color. The three channels always travel together in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grayscale color with all three channels set to `intensity`.
    #[must_use]
    pub const fn gray(intensity: u8) -> Self {
        Self::rgb(intensity, intensity, intensity)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Reads a color from the first three bytes of an RGBA32 or RGB24 pixel.
#[inline]
pub(crate) fn read_rgb(chunk: &[u8]) -> Color {
    Color::rgb(chunk[0], chunk[1], chunk[2])
}

/// Writes a color as packed RGB24.
#[inline]
pub(crate) fn put_rgb24(buf: &mut impl BufMut, color: Color) {
    buf.put_u8(color.r);
    buf.put_u8(color.g);
    buf.put_u8(color.b);
}

/// Writes a color as RGBA32 with an opaque alpha channel.
#[inline]
pub(crate) fn put_rgba32(buf: &mut impl BufMut, color: Color) {
    put_rgb24(buf, color);
    buf.put_u8(255);
}
