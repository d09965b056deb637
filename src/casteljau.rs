//! De Casteljau's algorithm, exposing every intermediate level.
//!
//! A chain of `n` control points describes a bezier curve of degree `n - 1`.
//! Repeatedly interpolating neighbouring points at `t` shrinks the chain by one point per step
//! until a single point remains: the curve's point at `t`.
//! The intermediate chains ("levels") are what a visualisation wants to draw.

use smallvec::SmallVec;

use crate::Point;

/// Chains up to this length are processed without touching the heap
const INLINE_POINTS: usize = 16;

/// Receives the levels computed by [`subdivide`].
pub trait LevelSink {
    /// Called once per level, in order of increasing `depth`.
    ///
    /// The first level (`depth == 0`) has one point less than the control chain,
    /// the last level consists of the curve point alone.
    fn level(&mut self, depth: usize, points: &[Point]);

    /// Called once with the resulting curve point after all levels have been emitted.
    fn terminal(&mut self, _point: Point) {}
}

/// Sink ignoring everything
impl LevelSink for () {
    fn level(&mut self, _depth: usize, _points: &[Point]) {}
}

/// Sink collecting all levels
impl LevelSink for Vec<Vec<Point>> {
    fn level(&mut self, _depth: usize, points: &[Point]) {
        self.push(points.to_vec());
    }
}

/// Linear interpolation between `a` and `b`.
///
/// `t` isn't clamped: values outside of `0..=1` extrapolate along the line.
pub fn lerp(a: &Point, b: &Point, t: f32) -> Point {
    a + (b - a) * t
}

/// Runs de castlejau's algorithm on `chain` at position `t` reporting each level to `sink`.
///
/// Returns the curve's point at `t` or `None` if `chain` is empty.
/// A chain with a single point emits no levels and yields the point itself.
pub fn subdivide<S: LevelSink + ?Sized>(chain: &[Point], t: f32, sink: &mut S) -> Option<Point> {
    let mut points: SmallVec<[Point; INLINE_POINTS]> = chain.iter().copied().collect();
    if points.is_empty() {
        return None;
    }

    let mut depth = 0;
    while points.len() > 1 {
        // Each point only depends on itself and its successor, so the level can be built in place
        for i in 1..points.len() {
            points[i - 1] = lerp(&points[i - 1], &points[i], t);
        }
        points.pop();

        sink.level(depth, &points);
        depth += 1;
    }

    let point = points[0];
    sink.terminal(point);
    Some(point)
}

/// Get the point on the curve defined by `chain` at position `t`.
pub fn evaluate(chain: &[Point], t: f32) -> Option<Point> {
    subdivide(chain, t, &mut ())
}

/// Collects all levels de castlejau's algorithm passes through for `chain` at `t`.
///
/// The result contains `chain.len() - 1` levels (none for empty or single point chains).
pub fn levels(chain: &[Point], t: f32) -> Vec<Vec<Point>> {
    let mut levels = Vec::with_capacity(chain.len().saturating_sub(1));
    subdivide(chain, t, &mut levels);
    levels
}
