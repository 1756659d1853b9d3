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

//! Error types.
//!
//! Every failure is a local, deterministic input or programming error. Nothing
//! here is transient, so callers never retry.

use thiserror::Error;

use crate::Color;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RleError>;

/// Errors returned by run sequence, codec and raster operations.
#[derive(Debug, Error)]
pub enum RleError {
    /// Linear pixel index at or past the end of the sequence.
    #[error("pixel index {index} out of range for {len} pixels")]
    OutOfRange { index: u64, len: u64 },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) out of range for {width}x{height} raster")]
    CoordinateOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid run: {0}")]
    InvalidRun(InvalidRunKind),

    /// Constructor input that cannot describe a raster.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("PNG export failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Why a run or run handle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRunKind {
    #[error("run length must be at least 1")]
    ZeroLength,
    #[error("the sentinel is not a run")]
    Sentinel,
    #[error("run handle refers to a removed run")]
    Stale,
}

/// A broken structural invariant found by `RunLengthEncoding::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("run lengths sum to {actual}, expected {expected}")]
    LengthSum { expected: u64, actual: u64 },

    #[error("run {position} has zero length")]
    ZeroLength { position: usize },

    #[error("runs {position} and {next} share color ({color})", next = .position + 1)]
    AdjacentEqualColor { position: usize, color: Color },

    #[error("links broken at run {position}")]
    BrokenLink { position: usize },
}
