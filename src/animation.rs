//! Playback state driving the curve parameter over time.

use crate::config::{INITIAL_SPEED, SPEED_STEP};

/// Whether the animation is advancing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// The parameter only changes through explicit commands
    Paused,

    /// The parameter advances every tick
    Playing,
}

/// What a call to [`AnimationController::tick`] did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Paused, nothing changed
    Idle,

    /// The parameter moved and stayed within `0..=1`
    Advanced,

    /// The parameter left `0..=1` and snapped to the opposite bound.
    ///
    /// Any trace recorded so far belongs to the previous sweep and should be cleared.
    Wrapped,
}

/// Owns the curve parameter `t`, its speed and the play state.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationController {
    parameter: f32,
    speed: f32,
    state: PlayState,
}

impl AnimationController {
    /// Paused at `t = 0` with [`INITIAL_SPEED`]
    pub fn new() -> Self {
        AnimationController {
            parameter: 0.0,
            speed: INITIAL_SPEED,
            state: PlayState::Paused,
        }
    }

    /// The curve parameter `t`
    pub fn parameter(&self) -> f32 {
        self.parameter
    }

    /// Parameter change per second while playing
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current play state
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Shorthand for `state() == PlayState::Playing`
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Switches between playing and paused
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        };
        log::debug!("Animation {:?} at t = {}", self.state, self.parameter);
    }

    /// Starts playing
    pub fn play(&mut self) {
        self.state = PlayState::Playing;
    }

    /// Stops playing
    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Moves the parameter to `t` without touching the play state.
    ///
    /// `t` isn't clamped.
    pub fn scrub(&mut self, t: f32) {
        self.parameter = t;
    }

    /// Sets the speed, negative values play the curve backwards.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Raises the speed by [`SPEED_STEP`]
    pub fn increase_speed(&mut self) {
        self.speed += SPEED_STEP;
        log::debug!("Animation speed raised to {}", self.speed);
    }

    /// Lowers the speed by [`SPEED_STEP`], possibly below zero
    pub fn decrease_speed(&mut self) {
        self.speed -= SPEED_STEP;
        log::debug!("Animation speed lowered to {}", self.speed);
    }

    /// Rewinds to `t = 0` and pauses. The speed is kept.
    pub fn reset(&mut self) {
        self.parameter = 0.0;
        self.state = PlayState::Paused;
    }

    /// Advances the parameter by `elapsed` seconds worth of motion.
    ///
    /// Leaving `0..=1` on either side wraps around to the other bound.
    pub fn tick(&mut self, elapsed: f32) -> Tick {
        if self.state == PlayState::Paused {
            return Tick::Idle;
        }

        self.parameter += elapsed * self.speed;
        if self.parameter > 1.0 {
            self.parameter = 0.0;
        } else if self.parameter < 0.0 {
            self.parameter = 1.0;
        } else {
            return Tick::Advanced;
        }

        log::debug!("Animation wrapped to t = {}", self.parameter);
        Tick::Wrapped
    }

    /// Whether the curve point of this frame belongs in the trace.
    ///
    /// Only while playing, past the start of the sweep, and for chains describing an actual curve.
    pub fn may_record(&self, chain_len: usize) -> bool {
        self.is_playing() && self.parameter > 0.0 && chain_len > 1
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}
