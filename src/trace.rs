//! Accumulates the curve points visited during playback.

use crate::animation::AnimationController;
use crate::sequence::{Append, BoundedPointSequence};
use crate::Point;

/// Chronological record of the points the animation passed through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceRecorder {
    points: BoundedPointSequence,
}

impl TraceRecorder {
    /// Creates an empty trace
    pub fn new() -> Self {
        TraceRecorder {
            points: BoundedPointSequence::new(),
        }
    }

    /// Appends `point` if the animation allows recording (see [`AnimationController::may_record`]).
    ///
    /// Returns whether the point is part of the trace afterwards.
    pub fn record(&mut self, animation: &AnimationController, chain_len: usize, point: Point) -> bool {
        if !animation.may_record(chain_len) {
            return false;
        }
        log::trace!("Trace point ({}, {}) at t = {}", point.x, point.y, animation.parameter());
        self.points.append(point) == Append::Stored
    }

    /// Forgets all recorded points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The recorded points, oldest first
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of recorded points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
