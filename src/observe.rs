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

//! Edit outcomes and observer hooks.
//!
//! [`RunLengthEncoding::set_pixel`] never prints or logs. It reports the path
//! it took as an [`Edit`], and callers that want diagnostics pass an
//! [`EditObserver`] to [`RunLengthEncoding::set_pixel_observed`].

use crate::codec::RunLengthEncoding;
use crate::Color;

/// How the target pixel was carved out of the run that contained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carve {
    /// The pixel already had the requested color.
    Unchanged,
    /// The containing run had length 1 and was recolored in its slot.
    Recolored,
    /// The pixel was the run's first; the run shrank and the new run went before it.
    ShrankFront,
    /// The pixel was the run's last; the run shrank and the new run went after it.
    ShrankBack,
    /// The run was split into left remainder, new pixel, right remainder.
    SplitInterior,
}

/// What a single `set_pixel` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// Linear, row-major index of the pixel.
    pub index: u32,
    pub previous: Color,
    pub color: Color,
    pub carve: Carve,
    /// The new run absorbed its predecessor.
    pub merged_left: bool,
    /// The new run absorbed its successor.
    pub merged_right: bool,
}

impl Edit {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.carve == Carve::Unchanged
    }

    /// Net change in run count caused by this edit.
    #[must_use]
    pub fn run_delta(&self) -> i32 {
        let carved = match self.carve {
            Carve::Unchanged | Carve::Recolored => 0,
            Carve::ShrankFront | Carve::ShrankBack => 1,
            Carve::SplitInterior => 2,
        };
        carved - i32::from(self.merged_left) - i32::from(self.merged_right)
    }
}

/// Receives every edit after the sequence has been updated.
pub trait EditObserver {
    fn on_edit(&mut self, codec: &RunLengthEncoding, edit: &Edit);
}

impl<F> EditObserver for F
where
    F: FnMut(&RunLengthEncoding, &Edit),
{
    fn on_edit(&mut self, codec: &RunLengthEncoding, edit: &Edit) {
        self(codec, edit);
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EditObserver for NoopObserver {
    fn on_edit(&mut self, _codec: &RunLengthEncoding, _edit: &Edit) {}
}

/// Observer that logs each edit at debug level and the full run list at trace
/// level.
#[cfg(feature = "debug-logging")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

#[cfg(feature = "debug-logging")]
impl EditObserver for LogObserver {
    fn on_edit(&mut self, codec: &RunLengthEncoding, edit: &Edit) {
        log::debug!(
            "RLE: pixel {} ({}) -> ({}): {:?}, merged left={}, right={}, {} runs",
            edit.index,
            edit.previous,
            edit.color,
            edit.carve,
            edit.merged_left,
            edit.merged_right,
            codec.run_count()
        );
        log::trace!("RLE: runs now {codec}");
    }
}
