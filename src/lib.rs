#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod animation;
pub mod casteljau;
pub mod config;
pub mod draw;
pub mod input;
pub mod sequence;
pub mod trace;
pub mod visualizer;

/// A position on the drawing area, `y` grows downwards
pub type Point = nalgebra::Vector2<f32>;

pub use crate::animation::{AnimationController, PlayState, Tick};
pub use crate::input::{Command, InputEvent, InteractionMapper};
pub use crate::sequence::{Append, BoundedPointSequence};
pub use crate::trace::TraceRecorder;
pub use crate::visualizer::Visualizer;
