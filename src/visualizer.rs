//! State owned by the frame loop and the per frame update.

use crate::animation::{AnimationController, Tick};
use crate::casteljau::{subdivide, LevelSink};
use crate::config::TRACE_POINT_RADIUS;
use crate::draw::{draw_polygonal_chain, draw_trace, palette, Canvas, Color};
use crate::input::Command;
use crate::sequence::{Append, BoundedPointSequence};
use crate::trace::TraceRecorder;
use crate::Point;

/// The control chain, the trace and the animation.
///
/// A frame loop owns exactly one of these and per frame
/// 1. applies the user's [`Command`]s with [`apply`](Visualizer::apply),
/// 2. moves the animation forward with [`advance`](Visualizer::advance),
/// 3. renders with [`draw`](Visualizer::draw).
///
/// [`frame`](Visualizer::frame) combines the last two steps.
#[derive(Clone, Debug, Default)]
pub struct Visualizer {
    control_chain: BoundedPointSequence,
    trace: TraceRecorder,
    animation: AnimationController,
}

impl Visualizer {
    /// No control points, empty trace, paused at `t = 0`
    pub fn new() -> Self {
        Visualizer {
            control_chain: BoundedPointSequence::new(),
            trace: TraceRecorder::new(),
            animation: AnimationController::new(),
        }
    }

    /// The user's control points
    pub fn control_chain(&self) -> &BoundedPointSequence {
        &self.control_chain
    }

    /// The curve points recorded during the current sweep
    pub fn trace(&self) -> &TraceRecorder {
        &self.trace
    }

    /// Play state, parameter and speed
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    /// Direct access to the animation, e.g. to scrub while paused
    pub fn animation_mut(&mut self) -> &mut AnimationController {
        &mut self.animation
    }

    /// Executes a user command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Append(point) => {
                if self.control_chain.append(point) == Append::Overflowed {
                    log::info!(
                        "Control chain exceeded {} points and was cleared",
                        self.control_chain.capacity()
                    );
                }
            }
            Command::Undo => {
                self.control_chain.pop();
            }
            Command::Reset => {
                log::debug!("Resetting visualizer");
                self.animation.reset();
                self.control_chain.clear();
                self.trace.clear();
            }
            Command::TogglePlay => self.animation.toggle(),
            Command::IncreaseSpeed => self.animation.increase_speed(),
            Command::DecreaseSpeed => self.animation.decrease_speed(),
        }
    }

    /// Moves the animation forward by `elapsed` seconds, clearing the trace when `t` wraps.
    pub fn advance(&mut self, elapsed: f32) -> Tick {
        let tick = self.animation.tick(elapsed);
        if tick == Tick::Wrapped {
            self.trace.clear();
        }
        tick
    }

    /// Renders the current state and records the curve point into the trace.
    ///
    /// The subdivision and the trace only appear once the chain describes a curve
    /// and the animation has left `t = 0`.
    /// Returns the curve point if it was evaluated.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Option<Point> {
        draw_polygonal_chain(canvas, &self.control_chain, Color::GRAY);

        let t = self.animation.parameter();
        if self.control_chain.len() <= 1 || t <= 0.0 {
            return None;
        }

        let point = subdivide(&self.control_chain, t, &mut LevelPainter(&mut *canvas))?;
        self.trace
            .record(&self.animation, self.control_chain.len(), point);
        draw_trace(canvas, self.trace.points());

        Some(point)
    }

    /// [`advance`](Visualizer::advance) followed by [`draw`](Visualizer::draw)
    pub fn frame<C: Canvas + ?Sized>(&mut self, elapsed: f32, canvas: &mut C) -> Option<Point> {
        self.advance(elapsed);
        self.draw(canvas)
    }
}

/// Draws each subdivision level in its depth's color and marks the resulting curve point
struct LevelPainter<'c, C: ?Sized>(&'c mut C);

impl<'c, C: Canvas + ?Sized> LevelSink for LevelPainter<'c, C> {
    fn level(&mut self, depth: usize, points: &[Point]) {
        draw_polygonal_chain(&mut *self.0, points, palette(depth));
    }

    fn terminal(&mut self, point: Point) {
        self.0.draw_circle(point, TRACE_POINT_RADIUS, Color::BLACK);
    }
}
