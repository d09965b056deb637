//! Fixed capacity point storage used for the control chain and the trace.

use std::ops::Deref;

use crate::config::CAPACITY;
use crate::Point;

/// Outcome of [`BoundedPointSequence::append`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Append {
    /// The point was stored at the end of the sequence
    Stored,

    /// The sequence was full: it has been emptied and the point was discarded
    Overflowed,
}

/// Ordered sequence of points which never grows beyond a fixed capacity.
///
/// Appending to a full sequence doesn't evict the oldest point.
/// Instead the whole sequence is cleared and the new point is dropped as well.
/// Callers which care can inspect the returned [`Append`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedPointSequence {
    points: Vec<Point>,
    capacity: usize,
}

impl BoundedPointSequence {
    /// Creates an empty sequence holding up to [`CAPACITY`] points
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    /// Creates an empty sequence holding up to `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedPointSequence {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a point, or resets the sequence if it is already full.
    pub fn append(&mut self, point: Point) -> Append {
        if self.points.len() < self.capacity {
            self.points.push(point);
            Append::Stored
        } else {
            log::debug!(
                "Point sequence reached its capacity of {}, clearing it",
                self.capacity
            );
            self.clear();
            Append::Overflowed
        }
    }

    /// Removes the last point. Does nothing on an empty sequence.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Removes all points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Maximum number of points this sequence holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the next append would reset the sequence
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }
}

impl Default for BoundedPointSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for BoundedPointSequence {
    type Target = [Point];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}
