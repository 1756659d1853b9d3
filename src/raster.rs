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

//! Dense, decompressed pixel grid.
//!
//! A [`Raster`] is only ever codec input or output. Pixels are stored row-major,
//! so `(x, y)` lives at linear index `y * width + x`.

use bytes::{Bytes, BytesMut};

use crate::common::{put_rgb24, put_rgba32, read_rgb, RGB24_BYTES, RGBA32_BYTES};
use crate::error::{Result, RleError};
use crate::Color;

/// A row-major grid of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Creates a black raster.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Creates a raster where every pixel is `color`.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; count as usize],
        })
    }

    /// Creates a raster by sampling `pixel_at(x, y)` in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn from_fn<F>(width: u32, height: u32, mut pixel_at: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel_at(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let count = pixel_count(width, height)?;
        if pixels.len() as u64 != u64::from(count) {
            return Err(RleError::MalformedInput(format!(
                "got {} pixels, expected {} for {}x{} raster",
                pixels.len(),
                count,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grayscale raster from row-major intensities.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] if `intensities.len()` is not
    /// `width * height`.
    pub fn from_gray(width: u32, height: u32, intensities: &[u8]) -> Result<Self> {
        Self::from_pixels(
            width,
            height,
            intensities.iter().copied().map(Color::gray).collect(),
        )
    }

    /// Builds a raster from an RGBA32 framebuffer. Alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] if the buffer is smaller than
    /// `width * height * 4` bytes.
    pub fn from_rgba(data: &[u8], width: u32, height: u32) -> Result<Self> {
        let count = pixel_count(width, height)? as usize;
        let expected_size = count * RGBA32_BYTES;
        if data.len() < expected_size {
            return Err(RleError::MalformedInput(format!(
                "RGBA buffer size mismatch: got {} bytes, expected {} bytes for {}x{} image",
                data.len(),
                expected_size,
                width,
                height
            )));
        }
        let pixels = data[..expected_size]
            .chunks_exact(RGBA32_BYTES)
            .map(read_rgb)
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::CoordinateOutOfRange`] outside the raster.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let i = self.index_of(x, y).ok_or(RleError::CoordinateOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Packed RGB24 bytes, row-major.
    #[must_use]
    pub fn to_rgb24(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.pixels.len() * RGB24_BYTES);
        for &color in &self.pixels {
            put_rgb24(&mut buf, color);
        }
        buf.freeze()
    }

    /// RGBA32 bytes with opaque alpha, row-major.
    #[must_use]
    pub fn to_rgba32(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.pixels.len() * RGBA32_BYTES);
        for &color in &self.pixels {
            put_rgba32(&mut buf, color);
        }
        buf.freeze()
    }

    /// Wraps pixels already known to match the dimensions.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

/// Validates raster dimensions and returns `width * height`.
///
/// Both sides must be non-zero and the product must fit in a `u32`, since a
/// single run may cover the whole raster.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<u32> {
    if width == 0 || height == 0 {
        return Err(RleError::MalformedInput(format!(
            "raster dimensions must be non-zero, got {width}x{height}"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        RleError::MalformedInput(format!(
            "{width}x{height} raster exceeds {} pixels",
            u32::MAX
        ))
    })
}
