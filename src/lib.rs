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

//! Run-length compressed rasters with random-access pixel edits.
//!
//! An image is stored as a doubly-linked sequence of `(color, length)` runs in
//! row-major scan order. The sequence is kept maximally compressed: no two
//! adjacent runs share a color, including after any number of
//! [`RunLengthEncoding::set_pixel`] calls.
//!
//! # Example
//!
//! ```
//! use rle_raster::{Color, Raster, RunLengthEncoding};
//!
//! let raster = Raster::from_gray(5, 2, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//! let mut rle = RunLengthEncoding::from_raster(&raster).unwrap();
//! assert_eq!(rle.run_count(), 10);
//!
//! // Pixel (0, 1) already holds 5, so the edited pixel merges into its run
//! rle.set_pixel(4, 0, Color::gray(5)).unwrap();
//! assert_eq!(rle.run_count(), 9);
//! assert!(rle.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`runs`]: the arena-backed run list with a circular sentinel
//! - [`codec`]: encoding, decoding and the single-pixel edit algorithm
//! - [`raster`]: the dense, decompressed view
//! - [`observe`]: edit outcomes and observer hooks for diagnostics
//! - [`export`]: PNG output of decoded rasters
//!
//! # Features
//!
//! - `debug-logging`: adds [`observe::LogObserver`], which reports edits
//!   through the `log` crate

pub mod codec;
pub mod common;
pub mod error;
pub mod export;
pub mod observe;
pub mod raster;
pub mod runs;

pub use codec::RunLengthEncoding;
pub use common::Color;
pub use error::{InvalidRunKind, InvariantViolation, Result, RleError};
pub use export::{encode_png, write_png};
#[cfg(feature = "debug-logging")]
pub use observe::LogObserver;
pub use observe::{Carve, Edit, EditObserver, NoopObserver};
pub use raster::Raster;
pub use runs::{Located, Run, RunId, RunSequence, Runs};
