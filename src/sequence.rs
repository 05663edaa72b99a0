//! Infinite wrap-around index sequences over a half-open range.

use std::ops::Range;

/// Which way a [`CyclicIndexSequence`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A restartable, infinite sequence of indices that wraps at the edges of
/// `low..high`.
///
/// The sequence holds its own position, so cloning it takes a snapshot: the
/// clone can be advanced freely to look ahead without disturbing the
/// original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicIndexSequence {
    next: usize,
    low: usize,
    high: usize,
    direction: Direction,
}

impl CyclicIndexSequence {
    /// Ascending sequence starting at `from`; `high - 1` is followed by `low`.
    #[must_use]
    pub fn forward(from: usize, range: Range<usize>) -> Self {
        Self::new(from, range, Direction::Forward)
    }

    /// Descending sequence starting at `from`; `low` is followed by `high - 1`.
    #[must_use]
    pub fn backward(from: usize, range: Range<usize>) -> Self {
        Self::new(from, range, Direction::Backward)
    }

    /// Placeholder sequence that yields `0` forever.
    #[must_use]
    pub fn zero() -> Self {
        Self::forward(0, 0..1)
    }

    fn new(from: usize, range: Range<usize>, direction: Direction) -> Self {
        debug_assert!(range.start < range.end, "empty range {range:?}");
        debug_assert!(range.contains(&from), "{from} outside {range:?}");
        Self {
            next: from,
            low: range.start,
            high: range.end,
            direction,
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The value the next call to `next()` will yield.
    #[must_use]
    pub const fn peek(&self) -> usize {
        self.next
    }

    /// The value `steps` positions ahead without advancing (`1` is [`peek`]).
    ///
    /// Returns `None` when `steps` is zero.
    ///
    /// [`peek`]: Self::peek
    #[must_use]
    pub fn lookahead(&self, steps: usize) -> Option<usize> {
        self.clone().take(steps).last()
    }

    const fn step(&self, current: usize) -> usize {
        match self.direction {
            Direction::Forward => {
                if current == self.high - 1 {
                    self.low
                } else {
                    current + 1
                }
            }
            Direction::Backward => {
                if current == self.low {
                    self.high - 1
                } else {
                    current - 1
                }
            }
        }
    }
}

impl Iterator for CyclicIndexSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let out = self.next;
        self.next = self.step(out);
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for CyclicIndexSequence {}
