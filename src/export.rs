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

//! PNG export of decoded rasters, for eyeballing edits.

use std::io::Write;

use crate::error::Result;
use crate::raster::Raster;

/// Writes `raster` as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns [`RleError::Png`](crate::RleError::Png) if encoding or writing fails.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&raster.to_rgb24())?;
    png_writer.finish()?;
    Ok(())
}

/// Encodes `raster` as an 8-bit RGB PNG in memory.
///
/// # Errors
///
/// Returns [`RleError::Png`](crate::RleError::Png) if encoding fails.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(raster, &mut buf)?;
    Ok(buf)
}
