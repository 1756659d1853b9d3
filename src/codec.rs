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

//! Run-length encoding of a raster with in-place single-pixel edits.
//!
//! # Encoding
//!
//! Pixels are scanned row-major (x fastest, y outermost). A run grows while
//! consecutive pixels share a color and a new run starts on every change, so a
//! freshly encoded image is maximally compressed by construction.
//!
//! # Editing
//!
//! [`RunLengthEncoding::set_pixel`] locates the run `R` that contains the pixel
//! and carves a length-1 run out of it:
//!
//! 1. **Unchanged:** `R` already has the color; nothing happens.
//! 2. **Recolored:** `R` is a single pixel; it is recolored in its slot.
//! 3. **Shrank front / back:** the pixel is `R`'s first or last; `R` shrinks by
//!    one and the new run is spliced in before or after it.
//! 4. **Split interior:** `R` keeps the left remainder, then come the new run
//!    and a right remainder carrying `R`'s color.
//!
//! The new run then absorbs its predecessor and successor if either already
//! has the new color. One edit can merge at most once per side, after which no
//! two adjacent runs share a color again.

use std::fmt;

use crate::error::{InvalidRunKind, InvariantViolation, Result, RleError};
use crate::observe::{Carve, Edit, EditObserver, NoopObserver};
use crate::raster::{pixel_count, Raster};
use crate::runs::{Located, Run, RunId, RunSequence, Runs};
use crate::Color;

/// A raster stored as a maximally-compressed sequence of runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthEncoding {
    width: u32,
    height: u32,
    runs: RunSequence,
}

impl RunLengthEncoding {
    /// Encodes an all-black image.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_uniform_color(width, height, Color::BLACK)
    }

    /// Encodes an image of one color as a single run.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn from_uniform_color(width: u32, height: u32, color: Color) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let mut runs = RunSequence::with_capacity(1);
        runs.append(color, count)?;
        Ok(Self {
            width,
            height,
            runs,
        })
    }

    /// Builds an encoding from explicit runs, in scan order.
    ///
    /// Adjacent input runs of the same color are coalesced.
    ///
    /// # Errors
    ///
    /// - [`RleError::InvalidRun`] if any run has length zero
    /// - [`RleError::MalformedInput`] if the lengths do not sum to
    ///   `width * height`
    pub fn from_runs<I>(width: u32, height: u32, runs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Run>,
    {
        let count = u64::from(pixel_count(width, height)?);
        let mut seq = RunSequence::new();
        let mut total = 0u64;

        for run in runs {
            let run: Run = run.into();
            if run.length == 0 {
                return Err(RleError::InvalidRun(InvalidRunKind::ZeroLength));
            }
            total += u64::from(run.length);
            if total > count {
                return Err(length_sum_mismatch(total, count, width, height));
            }

            let tail = seq.back().and_then(|id| seq.get(id).map(|last| (id, last)));
            match tail {
                Some((id, last)) if last.color == run.color => {
                    // Cannot overflow: bounded by `count`, itself a u32
                    seq.set_length(id, last.length + run.length)?;
                }
                _ => {
                    seq.append(run.color, run.length)?;
                }
            }
        }

        if total != count {
            return Err(length_sum_mismatch(total, count, width, height));
        }
        Ok(Self {
            width,
            height,
            runs: seq,
        })
    }

    /// Builds an encoding from parallel color and length arrays.
    ///
    /// # Errors
    ///
    /// As [`from_runs`](Self::from_runs), plus [`RleError::MalformedInput`] if
    /// the arrays differ in length.
    pub fn from_arrays(width: u32, height: u32, colors: &[Color], lengths: &[u32]) -> Result<Self> {
        if colors.len() != lengths.len() {
            return Err(RleError::MalformedInput(format!(
                "{} colors but {} run lengths",
                colors.len(),
                lengths.len()
            )));
        }
        Self::from_runs(
            width,
            height,
            colors
                .iter()
                .zip(lengths)
                .map(|(&color, &length)| Run::new(color, length)),
        )
    }

    /// Builds an encoding from per-channel parallel arrays, where run `i` has
    /// length `lengths[i]` and color `(red[i], green[i], blue[i])`.
    ///
    /// # Errors
    ///
    /// As [`from_runs`](Self::from_runs), plus [`RleError::MalformedInput`] if
    /// the four arrays differ in length.
    pub fn from_channels(
        width: u32,
        height: u32,
        red: &[u8],
        green: &[u8],
        blue: &[u8],
        lengths: &[u32],
    ) -> Result<Self> {
        let n = lengths.len();
        if red.len() != n || green.len() != n || blue.len() != n {
            return Err(RleError::MalformedInput(format!(
                "channel arrays have lengths {}/{}/{} but {} run lengths",
                red.len(),
                green.len(),
                blue.len(),
                n
            )));
        }
        Self::from_runs(
            width,
            height,
            (0..n).map(|i| Run::new(Color::rgb(red[i], green[i], blue[i]), lengths[i])),
        )
    }

    /// Adopts a hand-built sequence after checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] describing the first violated
    /// invariant.
    pub fn from_sequence(width: u32, height: u32, runs: RunSequence) -> Result<Self> {
        pixel_count(width, height)?;
        let encoding = Self {
            width,
            height,
            runs,
        };
        encoding
            .validate()
            .map_err(|violation| RleError::MalformedInput(violation.to_string()))?;
        Ok(encoding)
    }

    /// Encodes a raster by row-major scan.
    ///
    /// # Errors
    ///
    /// Only fails if the raster itself has invalid dimensions.
    pub fn from_raster(raster: &Raster) -> Result<Self> {
        Self::encode_scan(
            raster.width(),
            raster.height(),
            raster.pixels().iter().copied(),
        )
    }

    /// Encodes the image described by `pixel_at(x, y)` by row-major scan.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::MalformedInput`] for zero or overflowing dimensions.
    pub fn from_fn<F>(width: u32, height: u32, mut pixel_at: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        let coords = (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)));
        Self::encode_scan(width, height, coords.map(|(x, y)| pixel_at(x, y)))
    }

    fn encode_scan<I>(width: u32, height: u32, pixels: I) -> Result<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let count = pixel_count(width, height)?;
        let mut runs = RunSequence::new();
        let mut pixels = pixels.into_iter();
        let Some(mut color) = pixels.next() else {
            return Err(length_sum_mismatch(0, count.into(), width, height));
        };
        let mut length = 1u32;
        let mut scanned = 1u32;

        for next in pixels.take(count as usize - 1) {
            scanned += 1;
            if next == color {
                length += 1;
            } else {
                runs.append(color, length)?;
                color = next;
                length = 1;
            }
        }
        runs.append(color, length)?;

        if scanned != count {
            return Err(length_sum_mismatch(
                scanned.into(),
                count.into(),
                width,
                height,
            ));
        }
        Ok(Self {
            width,
            height,
            runs,
        })
    }

    /// Decodes back into a dense raster.
    #[must_use]
    pub fn to_raster(&self) -> Raster {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for run in &self.runs {
            pixels.extend(std::iter::repeat_n(run.color, run.length as usize));
        }
        Raster::from_parts(self.width, self.height, pixels)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`.
    #[must_use]
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Iterates runs front to back.
    #[must_use]
    pub fn runs(&self) -> Runs<'_> {
        self.runs.iter()
    }

    /// Read access to the underlying run sequence.
    #[must_use]
    pub fn sequence(&self) -> &RunSequence {
        &self.runs
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::CoordinateOutOfRange`] outside the raster.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        let index = self.linear_index(x, y)?;
        let Located { id, .. } = self.runs.locate(u64::from(index))?;
        self.run(id).map(|run| run.color)
    }

    /// Sets the pixel at `(x, y)` to `color`, keeping the sequence maximally
    /// compressed.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::CoordinateOutOfRange`] outside the raster; the
    /// encoding is untouched in that case.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<Edit> {
        self.set_pixel_observed(x, y, color, &mut NoopObserver)
    }

    /// [`set_pixel`](Self::set_pixel), then reports the edit to `observer`.
    ///
    /// # Errors
    ///
    /// As [`set_pixel`](Self::set_pixel). The observer is not called on error.
    pub fn set_pixel_observed<O>(
        &mut self,
        x: u32,
        y: u32,
        color: Color,
        observer: &mut O,
    ) -> Result<Edit>
    where
        O: EditObserver + ?Sized,
    {
        let edit = self.apply(x, y, color)?;
        debug_assert_eq!(self.validate(), Ok(()));
        observer.on_edit(self, &edit);
        Ok(edit)
    }

    fn apply(&mut self, x: u32, y: u32, color: Color) -> Result<Edit> {
        let index = self.linear_index(x, y)?;
        let Located { id, start } = self.runs.locate(u64::from(index))?;
        let run = self.run(id)?;

        let mut edit = Edit {
            index,
            previous: run.color,
            color,
            carve: Carve::Unchanged,
            merged_left: false,
            merged_right: false,
        };
        if run.color == color {
            return Ok(edit);
        }

        #[allow(clippy::cast_possible_truncation)] // offset < run.length, a u32
        let offset = (u64::from(index) - start) as u32;
        let last = run.length - 1;

        let pixel = if run.length == 1 {
            edit.carve = Carve::Recolored;
            self.runs.set_color(id, color)?;
            id
        } else if offset == 0 {
            edit.carve = Carve::ShrankFront;
            self.runs.set_length(id, last)?;
            self.runs.insert_before(id, color, 1)?
        } else if offset == last {
            edit.carve = Carve::ShrankBack;
            self.runs.set_length(id, last)?;
            self.runs.insert_after(id, color, 1)?
        } else {
            edit.carve = Carve::SplitInterior;
            self.runs.set_length(id, offset)?;
            let pixel = self.runs.insert_after(id, color, 1)?;
            self.runs.insert_after(pixel, run.color, last - offset)?;
            pixel
        };

        edit.merged_left = self.absorb(pixel, self.runs.prev(pixel))?;
        edit.merged_right = self.absorb(pixel, self.runs.next(pixel))?;
        Ok(edit)
    }

    /// Folds `neighbor` into `target` if both share a color.
    fn absorb(&mut self, target: RunId, neighbor: Option<RunId>) -> Result<bool> {
        let Some(neighbor) = neighbor else {
            return Ok(false);
        };
        let target_run = self.run(target)?;
        let neighbor_run = self.run(neighbor)?;
        if neighbor_run.color != target_run.color {
            return Ok(false);
        }
        self.runs.remove(neighbor)?;
        self.runs
            .set_length(target, target_run.length + neighbor_run.length)?;
        Ok(true)
    }

    /// Checks the four structural invariants: lengths sum to the pixel count,
    /// every run is non-empty, no two adjacent runs share a color, and links
    /// agree in both directions.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        self.runs.check_links()?;

        let mut total = 0u64;
        let mut prev: Option<Color> = None;
        for (position, run) in self.runs.iter().enumerate() {
            if run.length == 0 {
                return Err(InvariantViolation::ZeroLength { position });
            }
            if prev == Some(run.color) {
                return Err(InvariantViolation::AdjacentEqualColor {
                    position: position - 1,
                    color: run.color,
                });
            }
            total += u64::from(run.length);
            prev = Some(run.color);
        }

        let expected = u64::from(self.width) * u64::from(self.height);
        if total != expected {
            return Err(InvariantViolation::LengthSum {
                expected,
                actual: total,
            });
        }
        Ok(())
    }

    fn linear_index(&self, x: u32, y: u32) -> Result<u32> {
        if x >= self.width || y >= self.height {
            return Err(RleError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn run(&self, id: RunId) -> Result<Run> {
        self.runs
            .get(id)
            .ok_or(RleError::InvalidRun(InvalidRunKind::Stale))
    }
}

fn length_sum_mismatch(total: u64, count: u64, width: u32, height: u32) -> RleError {
    RleError::MalformedInput(format!(
        "run lengths sum to at least {total}, expected {count} for {width}x{height} raster"
    ))
}

impl<'a> IntoIterator for &'a RunLengthEncoding {
    type Item = Run;
    type IntoIter = Runs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// Formats as `[(length, r, g, b), ...]` front to back.
impl fmt::Display for RunLengthEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{run}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_runs(encoding: &RunLengthEncoding) -> Vec<(u8, u32)> {
        encoding.runs().map(|r| (r.color.r, r.length)).collect()
    }

    fn gray_line(values: &[u8]) -> RunLengthEncoding {
        let raster = Raster::from_gray(values.len() as u32, 1, values).unwrap();
        RunLengthEncoding::from_raster(&raster).unwrap()
    }

    #[test]
    fn test_uniform_color_is_one_run() {
        let rle = RunLengthEncoding::new(4, 3).unwrap();
        assert_eq!(rle.run_count(), 1);
        assert_eq!(gray_runs(&rle), vec![(0, 12)]);
        assert_eq!(rle.to_raster(), Raster::new(4, 3).unwrap());
        assert!(rle.validate().is_ok());
    }

    #[test]
    fn test_from_raster_merges_equal_neighbours() {
        let rle = gray_line(&[5, 5, 5, 7, 7, 5]);
        assert_eq!(gray_runs(&rle), vec![(5, 3), (7, 2), (5, 1)]);
    }

    #[test]
    fn test_from_raster_runs_cross_rows() {
        let raster = Raster::from_gray(3, 2, &[1, 2, 2, 2, 2, 3]).unwrap();
        let rle = RunLengthEncoding::from_raster(&raster).unwrap();
        assert_eq!(gray_runs(&rle), vec![(1, 1), (2, 4), (3, 1)]);
    }

    #[test]
    fn test_from_fn_matches_from_raster() {
        let f = |x: u32, y: u32| Color::gray(((x / 2) + y) as u8);
        let from_fn = RunLengthEncoding::from_fn(5, 3, f).unwrap();
        let from_raster = RunLengthEncoding::from_raster(&Raster::from_fn(5, 3, f).unwrap()).unwrap();
        assert_eq!(from_fn, from_raster);
    }

    #[test]
    fn test_from_runs_coalesces_and_validates() {
        let rle = RunLengthEncoding::from_arrays(
            2,
            2,
            &[Color::gray(1), Color::gray(1), Color::gray(2)],
            &[1, 2, 1],
        )
        .unwrap();
        assert_eq!(gray_runs(&rle), vec![(1, 3), (2, 1)]);
        assert!(rle.validate().is_ok());
    }

    #[test]
    fn test_from_runs_rejects_bad_input() {
        let short = RunLengthEncoding::from_runs(2, 2, [(Color::BLACK, 3)]);
        assert!(matches!(short, Err(RleError::MalformedInput(_))));

        let long = RunLengthEncoding::from_runs(2, 2, [(Color::BLACK, 3), (Color::WHITE, 2)]);
        assert!(matches!(long, Err(RleError::MalformedInput(_))));

        let zero = RunLengthEncoding::from_runs(2, 2, [(Color::BLACK, 0), (Color::WHITE, 4)]);
        assert!(matches!(
            zero,
            Err(RleError::InvalidRun(InvalidRunKind::ZeroLength))
        ));

        let mismatch = RunLengthEncoding::from_arrays(2, 2, &[Color::BLACK], &[2, 2]);
        assert!(matches!(mismatch, Err(RleError::MalformedInput(_))));

        let empty = RunLengthEncoding::from_runs(2, 2, Vec::<Run>::new());
        assert!(matches!(empty, Err(RleError::MalformedInput(_))));
    }

    #[test]
    fn test_from_channels() {
        let rle =
            RunLengthEncoding::from_channels(3, 1, &[1, 4], &[2, 5], &[3, 6], &[2, 1]).unwrap();
        assert_eq!(
            rle.runs().collect::<Vec<_>>(),
            vec![
                Run::new(Color::rgb(1, 2, 3), 2),
                Run::new(Color::rgb(4, 5, 6), 1)
            ]
        );
        let ragged = RunLengthEncoding::from_channels(3, 1, &[1, 4], &[2], &[3, 6], &[2, 1]);
        assert!(matches!(ragged, Err(RleError::MalformedInput(_))));
    }

    #[test]
    fn test_from_sequence_checks_invariants() {
        let mut seq = RunSequence::new();
        seq.append(Color::gray(1), 2).unwrap();
        seq.append(Color::gray(1), 2).unwrap();
        assert!(matches!(
            RunLengthEncoding::from_sequence(2, 2, seq.clone()),
            Err(RleError::MalformedInput(_))
        ));

        let last = seq.back().unwrap();
        seq.set_color(last, Color::gray(2)).unwrap();
        let rle = RunLengthEncoding::from_sequence(2, 2, seq).unwrap();
        assert_eq!(gray_runs(&rle), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_set_pixel_noop() {
        let mut rle = gray_line(&[1, 1, 2]);
        let before = rle.clone();
        let edit = rle.set_pixel(1, 0, Color::gray(1)).unwrap();
        assert!(edit.is_noop());
        assert_eq!(edit.previous, Color::gray(1));
        assert_eq!(rle, before);
    }

    #[test]
    fn test_set_pixel_recolors_singleton() {
        let mut rle = gray_line(&[1, 2, 3]);
        let edit = rle.set_pixel(1, 0, Color::gray(9)).unwrap();
        assert_eq!(edit.carve, Carve::Recolored);
        assert_eq!(gray_runs(&rle), vec![(1, 1), (9, 1), (3, 1)]);
    }

    #[test]
    fn test_set_pixel_singleton_merges_both_sides() {
        let mut rle = gray_line(&[4, 4, 2, 4]);
        let edit = rle.set_pixel(2, 0, Color::gray(4)).unwrap();
        assert_eq!(edit.carve, Carve::Recolored);
        assert!(edit.merged_left && edit.merged_right);
        assert_eq!(edit.run_delta(), -2);
        assert_eq!(gray_runs(&rle), vec![(4, 4)]);
    }

    #[test]
    fn test_set_pixel_shrinks_front() {
        let mut rle = gray_line(&[1, 2, 2, 2]);
        let edit = rle.set_pixel(1, 0, Color::gray(7)).unwrap();
        assert_eq!(edit.carve, Carve::ShrankFront);
        assert_eq!(gray_runs(&rle), vec![(1, 1), (7, 1), (2, 2)]);

        let edit = rle.set_pixel(2, 0, Color::gray(7)).unwrap();
        assert_eq!(edit.carve, Carve::ShrankFront);
        assert!(edit.merged_left);
        assert_eq!(gray_runs(&rle), vec![(1, 1), (7, 2), (2, 1)]);
    }

    #[test]
    fn test_set_pixel_shrinks_back() {
        let mut rle = gray_line(&[2, 2, 2, 3]);
        let edit = rle.set_pixel(2, 0, Color::gray(3)).unwrap();
        assert_eq!(edit.carve, Carve::ShrankBack);
        assert!(edit.merged_right);
        assert!(!edit.merged_left);
        assert_eq!(gray_runs(&rle), vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn test_set_pixel_length_two_run_is_boundary_case() {
        let mut rle = gray_line(&[5, 5]);
        assert_eq!(rle.set_pixel(0, 0, Color::gray(1)).unwrap().carve, Carve::ShrankFront);
        let mut rle = gray_line(&[5, 5]);
        assert_eq!(rle.set_pixel(1, 0, Color::gray(1)).unwrap().carve, Carve::ShrankBack);
        assert_eq!(gray_runs(&rle), vec![(5, 1), (1, 1)]);
    }

    #[test]
    fn test_set_pixel_splits_interior() {
        let mut rle = RunLengthEncoding::new(5, 1).unwrap();
        let edit = rle.set_pixel(2, 0, Color::gray(8)).unwrap();
        assert_eq!(edit.carve, Carve::SplitInterior);
        assert_eq!(edit.run_delta(), 2);
        assert_eq!(gray_runs(&rle), vec![(0, 2), (8, 1), (0, 2)]);

        // Undo merges both remainders back together
        let edit = rle.set_pixel(2, 0, Color::BLACK).unwrap();
        assert_eq!(edit.carve, Carve::Recolored);
        assert_eq!(gray_runs(&rle), vec![(0, 5)]);
    }

    #[test]
    fn test_set_pixel_out_of_range() {
        let mut rle = RunLengthEncoding::new(3, 2).unwrap();
        let before = rle.clone();
        assert!(matches!(
            rle.set_pixel(3, 0, Color::WHITE),
            Err(RleError::CoordinateOutOfRange { x: 3, y: 0, width: 3, height: 2 })
        ));
        assert!(matches!(
            rle.set_pixel(0, 2, Color::WHITE),
            Err(RleError::CoordinateOutOfRange { .. })
        ));
        assert_eq!(rle, before);
    }

    #[test]
    fn test_get_pixel() {
        let rle = gray_line(&[3, 3, 4, 5]);
        assert_eq!(rle.get_pixel(1, 0).unwrap(), Color::gray(3));
        assert_eq!(rle.get_pixel(3, 0).unwrap(), Color::gray(5));
        assert!(rle.get_pixel(4, 0).is_err());
    }

    #[test]
    fn test_observer_sees_every_edit() {
        let mut rle = RunLengthEncoding::new(3, 3).unwrap();
        let mut seen = Vec::new();
        let mut observer = |codec: &RunLengthEncoding, edit: &Edit| {
            seen.push((edit.carve, codec.run_count()));
        };
        rle.set_pixel_observed(1, 1, Color::WHITE, &mut observer).unwrap();
        rle.set_pixel_observed(1, 1, Color::WHITE, &mut observer).unwrap();
        rle.set_pixel_observed(0, 0, Color::WHITE, &mut observer).unwrap();
        assert!(rle.set_pixel_observed(9, 9, Color::WHITE, &mut observer).is_err());
        assert_eq!(
            seen,
            vec![
                (Carve::SplitInterior, 3),
                (Carve::Unchanged, 3),
                (Carve::ShrankFront, 4),
            ]
        );
    }

    #[test]
    fn test_validate_reports_adjacent_equal_colors() {
        let mut rle = gray_line(&[1, 2, 3]);
        let mid = rle.runs.ids().nth(1).unwrap();
        rle.runs.set_color(mid, Color::gray(1)).unwrap();
        assert_eq!(
            rle.validate(),
            Err(InvariantViolation::AdjacentEqualColor {
                position: 0,
                color: Color::gray(1)
            })
        );
    }

    #[test]
    fn test_validate_reports_length_sum() {
        let mut rle = gray_line(&[1, 2, 3]);
        let last = rle.runs.back().unwrap();
        rle.runs.set_length(last, 2).unwrap();
        assert_eq!(
            rle.validate(),
            Err(InvariantViolation::LengthSum {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_display() {
        let rle = RunLengthEncoding::from_runs(
            3,
            1,
            [(Color::BLACK, 2), (Color::rgb(255, 0, 0), 1)],
        )
        .unwrap();
        assert_eq!(rle.to_string(), "[(2, 0, 0, 0), (1, 255, 0, 0)]");
    }
}
