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

//! Doubly-linked run sequence stored in an arena.
//!
//! # Layout
//!
//! Nodes live in a single `Vec` and link to each other by slot index. Slot 0 is
//! a sentinel that anchors the list circularly: its `next` is the first run and
//! its `prev` is the last run, so an empty sequence is a sentinel pointing at
//! itself. The sentinel is never yielded, counted, or accepted as a handle.
//!
//! Removed slots go onto a free list and get their generation bumped, so a
//! [`RunId`] held across a removal is detected as stale instead of silently
//! aliasing whatever run reuses the slot.
//!
//! # Invariants maintained here
//!
//! - every live run has `length >= 1`
//! - for adjacent nodes `A -> B`, `A.next == B` and `B.prev == A`
//! - `total_length()` is the sum of all live run lengths
//!
//! Adjacent-color merging is the codec's job; this layer accepts any colors.

use std::fmt;

use crate::error::{InvalidRunKind, InvariantViolation, Result, RleError};
use crate::Color;

const SENTINEL: u32 = 0;

/// A span of `length` consecutive pixels sharing `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub color: Color,
    pub length: u32,
}

impl Run {
    #[must_use]
    pub const fn new(color: Color, length: u32) -> Self {
        Self { color, length }
    }
}

impl From<(Color, u32)> for Run {
    fn from((color, length): (Color, u32)) -> Self {
        Self::new(color, length)
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.length, self.color)
    }
}

/// Generational handle to a run inside a [`RunSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId {
    index: u32,
    generation: u32,
}

/// Result of [`RunSequence::locate`]: the run containing a linear pixel index
/// and the linear index of that run's first pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub id: RunId,
    pub start: u64,
}

#[derive(Debug, Clone)]
struct Node {
    run: Run,
    prev: u32,
    next: u32,
    generation: u32,
    live: bool,
}

impl Node {
    const fn sentinel() -> Self {
        Self {
            run: Run::new(Color::BLACK, 0),
            prev: SENTINEL,
            next: SENTINEL,
            generation: 0,
            live: false,
        }
    }
}

/// Ordered, doubly-linked sequence of runs.
#[derive(Debug, Clone)]
pub struct RunSequence {
    nodes: Vec<Node>,
    free: Vec<u32>,
    len: usize,
    total: u64,
}

impl Default for RunSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSequence {
    /// Creates an empty sequence holding only the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `runs` runs before reallocating.
    #[must_use]
    pub fn with_capacity(runs: usize) -> Self {
        let mut nodes = Vec::with_capacity(runs + 1);
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
            total: 0,
        }
    }

    /// Number of runs, not counting the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of all run lengths.
    #[must_use]
    pub fn total_length(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn front(&self) -> Option<RunId> {
        self.handle_of(self.nodes[SENTINEL as usize].next)
    }

    #[must_use]
    pub fn back(&self) -> Option<RunId> {
        self.handle_of(self.nodes[SENTINEL as usize].prev)
    }

    /// The run after `id`, or `None` at the end of the sequence or for a
    /// stale handle.
    #[must_use]
    pub fn next(&self, id: RunId) -> Option<RunId> {
        let slot = self.resolve(id).ok()?;
        self.handle_of(self.nodes[slot as usize].next)
    }

    /// The run before `id`, or `None` at the start of the sequence or for a
    /// stale handle.
    #[must_use]
    pub fn prev(&self, id: RunId) -> Option<RunId> {
        let slot = self.resolve(id).ok()?;
        self.handle_of(self.nodes[slot as usize].prev)
    }

    #[must_use]
    pub fn get(&self, id: RunId) -> Option<Run> {
        let slot = self.resolve(id).ok()?;
        Some(self.nodes[slot as usize].run)
    }

    #[must_use]
    pub fn contains(&self, id: RunId) -> bool {
        self.resolve(id).is_ok()
    }

    /// Finds the run containing `linear_index` by walking from the front.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::OutOfRange`] if `linear_index >= total_length()`.
    pub fn locate(&self, linear_index: u64) -> Result<Located> {
        let out_of_range = RleError::OutOfRange {
            index: linear_index,
            len: self.total,
        };
        if linear_index >= self.total {
            return Err(out_of_range);
        }

        let mut start = 0u64;
        let mut slot = self.nodes[SENTINEL as usize].next;
        while slot != SENTINEL {
            let node = &self.nodes[slot as usize];
            let end = start + u64::from(node.run.length);
            if linear_index < end {
                return Ok(Located {
                    id: self.handle(slot),
                    start,
                });
            }
            start = end;
            slot = node.next;
        }
        Err(out_of_range)
    }

    /// Splices a new run in directly before `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::InvalidRun`] for a zero length, the sentinel, or a
    /// stale handle.
    pub fn insert_before(&mut self, id: RunId, color: Color, length: u32) -> Result<RunId> {
        check_length(length)?;
        let slot = self.resolve(id)?;
        let anchor = self.nodes[slot as usize].prev;
        Ok(self.link_after(anchor, Run::new(color, length)))
    }

    /// Splices a new run in directly after `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::InvalidRun`] for a zero length, the sentinel, or a
    /// stale handle.
    pub fn insert_after(&mut self, id: RunId, color: Color, length: u32) -> Result<RunId> {
        check_length(length)?;
        let slot = self.resolve(id)?;
        Ok(self.link_after(slot, Run::new(color, length)))
    }

    /// Adds a run at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::InvalidRun`] if `length` is zero.
    pub fn append(&mut self, color: Color, length: u32) -> Result<RunId> {
        check_length(length)?;
        let last = self.nodes[SENTINEL as usize].prev;
        Ok(self.link_after(last, Run::new(color, length)))
    }

    /// Adds a run at the head.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::InvalidRun`] if `length` is zero.
    pub fn push_front(&mut self, color: Color, length: u32) -> Result<RunId> {
        check_length(length)?;
        Ok(self.link_after(SENTINEL, Run::new(color, length)))
    }

    /// Splices `id` out of the sequence, relinking its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::InvalidRun`] for the sentinel or a stale handle.
    pub fn remove(&mut self, id: RunId) -> Result<Run> {
        let slot = self.resolve(id)?;
        Ok(self.unlink(slot))
    }

    /// Removes and returns the first run. Does nothing on an empty sequence.
    pub fn pop_front(&mut self) -> Option<Run> {
        let slot = self.nodes[SENTINEL as usize].next;
        (slot != SENTINEL).then(|| self.unlink(slot))
    }

    /// Removes and returns the last run. Does nothing on an empty sequence.
    pub fn pop_back(&mut self) -> Option<Run> {
        let slot = self.nodes[SENTINEL as usize].prev;
        (slot != SENTINEL).then(|| self.unlink(slot))
    }

    /// Iterates runs front to back. Call again to restart.
    #[must_use]
    pub fn iter(&self) -> Runs<'_> {
        Runs {
            nodes: &self.nodes,
            slot: self.nodes[SENTINEL as usize].next,
            remaining: self.len,
        }
    }

    /// Iterates run handles front to back.
    pub fn ids(&self) -> impl Iterator<Item = RunId> + '_ {
        let mut slot = self.nodes[SENTINEL as usize].next;
        std::iter::from_fn(move || {
            if slot == SENTINEL {
                return None;
            }
            let id = self.handle(slot);
            slot = self.nodes[slot as usize].next;
            Some(id)
        })
    }

    /// Verifies that `prev`/`next` links agree in both directions and that the
    /// forward walk visits exactly `len()` live runs.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::BrokenLink`] with the position of the
    /// first inconsistent run.
    pub fn check_links(&self) -> std::result::Result<(), InvariantViolation> {
        let mut prev = SENTINEL;
        let mut slot = self.nodes[SENTINEL as usize].next;
        let mut position = 0;
        while slot != SENTINEL {
            let node = self
                .nodes
                .get(slot as usize)
                .ok_or(InvariantViolation::BrokenLink { position })?;
            if position >= self.len || !node.live || node.prev != prev {
                return Err(InvariantViolation::BrokenLink { position });
            }
            prev = slot;
            slot = node.next;
            position += 1;
        }
        if self.nodes[SENTINEL as usize].prev != prev || position != self.len {
            return Err(InvariantViolation::BrokenLink { position });
        }
        Ok(())
    }

    /// Rewrites the length of a run in place.
    pub(crate) fn set_length(&mut self, id: RunId, length: u32) -> Result<()> {
        check_length(length)?;
        let slot = self.resolve(id)?;
        let run = &mut self.nodes[slot as usize].run;
        self.total = self.total - u64::from(run.length) + u64::from(length);
        run.length = length;
        Ok(())
    }

    /// Rewrites the color of a run in place.
    pub(crate) fn set_color(&mut self, id: RunId, color: Color) -> Result<()> {
        let slot = self.resolve(id)?;
        self.nodes[slot as usize].run.color = color;
        Ok(())
    }

    fn resolve(&self, id: RunId) -> Result<u32> {
        if id.index == SENTINEL {
            return Err(RleError::InvalidRun(InvalidRunKind::Sentinel));
        }
        match self.nodes.get(id.index as usize) {
            Some(node) if node.live && node.generation == id.generation => Ok(id.index),
            _ => Err(RleError::InvalidRun(InvalidRunKind::Stale)),
        }
    }

    fn handle(&self, slot: u32) -> RunId {
        RunId {
            index: slot,
            generation: self.nodes[slot as usize].generation,
        }
    }

    fn handle_of(&self, slot: u32) -> Option<RunId> {
        (slot != SENTINEL).then(|| self.handle(slot))
    }

    /// Allocates a node for `run` and links it between `anchor` and its
    /// current successor.
    #[allow(clippy::cast_possible_truncation)] // slot count is bounded by pixel count, a u32
    fn link_after(&mut self, anchor: u32, run: Run) -> RunId {
        let next = self.nodes[anchor as usize].next;
        let slot = if let Some(slot) = self.free.pop() {
            let node = &mut self.nodes[slot as usize];
            node.run = run;
            node.prev = anchor;
            node.next = next;
            node.live = true;
            slot
        } else {
            let slot = self.nodes.len() as u32;
            self.nodes.push(Node {
                run,
                prev: anchor,
                next,
                generation: 0,
                live: true,
            });
            slot
        };
        self.nodes[anchor as usize].next = slot;
        self.nodes[next as usize].prev = slot;
        self.len += 1;
        self.total += u64::from(run.length);
        self.handle(slot)
    }

    fn unlink(&mut self, slot: u32) -> Run {
        let (prev, next, run) = {
            let node = &mut self.nodes[slot as usize];
            node.live = false;
            node.generation = node.generation.wrapping_add(1);
            (node.prev, node.next, node.run)
        };
        self.nodes[prev as usize].next = next;
        self.nodes[next as usize].prev = prev;
        self.free.push(slot);
        self.len -= 1;
        self.total -= u64::from(run.length);
        run
    }
}

fn check_length(length: u32) -> Result<()> {
    if length == 0 {
        return Err(RleError::InvalidRun(InvalidRunKind::ZeroLength));
    }
    Ok(())
}

impl PartialEq for RunSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for RunSequence {}

impl<'a> IntoIterator for &'a RunSequence {
    type Item = Run;
    type IntoIter = Runs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over the runs of a [`RunSequence`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    nodes: &'a [Node],
    slot: u32,
    remaining: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        if self.slot == SENTINEL {
            return None;
        }
        let node = &self.nodes[self.slot as usize];
        self.slot = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Runs<'_> {}

impl std::iter::FusedIterator for Runs<'_> {}
