//! Compile-time constants shared by the engine and its frontends.

/// Maximum number of points held by the control chain and by the trace
pub const CAPACITY: usize = 1024;

/// Animation speed on startup, in parameter units per second
pub const INITIAL_SPEED: f32 = 0.2;

/// Amount added or removed by a single speed command
pub const SPEED_STEP: f32 = 0.1;

/// Radius of the circles marking control points and subdivision points
pub const CONTROL_POINT_RADIUS: f32 = 4.0;

/// Stroke width of the control polygon and subdivision levels
pub const CONTROL_LINE_THICKNESS: f32 = 3.0;

/// Radius of the circle marking the current curve point
pub const TRACE_POINT_RADIUS: f32 = 5.0;

/// Stroke width of the recorded trace
pub const TRACE_THICKNESS: f32 = 4.0;

/// Initial window width
pub const WINDOW_WIDTH: f32 = 720.0;

/// Initial window height
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Window title
pub const WINDOW_TITLE: &str = "Bézier Curve Visualizer";

/// Spacing between buttons and around the button strip
pub const GAP: f32 = 16.0;

/// Width of a control button
pub const BUTTON_WIDTH: f32 = 110.0;

/// Height of a control button
pub const BUTTON_HEIGHT: f32 = 50.0;

/// Font size of the button labels
pub const BUTTON_TEXT_SIZE: f32 = 20.0;

/// Frame rate the interactive frontend aims for
pub const TARGET_FPS: f32 = 60.0;
