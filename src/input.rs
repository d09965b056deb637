//! Translates raw input into [`Command`]s for the [`Visualizer`](crate::visualizer::Visualizer).
//!
//! Frontends decode their device events into [`InputEvent`]s and feed them to an
//! [`InteractionMapper`]. The mapper also knows where the control buttons live,
//! so frontends can place their widgets and clicks on them aren't taken as new control points.

use crate::config::{BUTTON_HEIGHT, BUTTON_WIDTH, GAP};
use crate::Point;

/// Everything the user can ask the visualizer to do
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Add a control point at the end of the chain
    Append(Point),
    /// Remove the last control point
    Undo,
    /// Clear everything and rewind the animation
    Reset,
    /// Switch between playing and paused
    TogglePlay,
    /// Play faster
    IncreaseSpeed,
    /// Play slower, eventually backwards
    DecreaseSpeed,
}

/// Keys with a binding
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Space bar
    Space,
    /// Letter `U`
    U,
    /// Letter `R`
    R,
    /// `=`, shares its key with `+` on most layouts
    Equal,
    /// `-`
    Minus,
}

/// The control buttons along the bottom of the window
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Starts or pauses the animation
    PlayPause,
    /// Removes the last control point
    Undo,
    /// Clears everything
    Reset,
    /// Lowers the speed
    SlowDown,
    /// Raises the speed
    SpeedUp,
}

impl Button {
    /// All buttons, left to right
    pub const ALL: [Button; 5] = [
        Button::PlayPause,
        Button::Undo,
        Button::Reset,
        Button::SlowDown,
        Button::SpeedUp,
    ];

    /// The command a click on this button issues
    pub fn command(self) -> Command {
        match self {
            Button::PlayPause => Command::TogglePlay,
            Button::Undo => Command::Undo,
            Button::Reset => Command::Reset,
            Button::SlowDown => Command::DecreaseSpeed,
            Button::SpeedUp => Command::IncreaseSpeed,
        }
    }

    /// Text to show on the button
    pub fn label(self, playing: bool) -> &'static str {
        match self {
            Button::PlayPause if playing => "Pause",
            Button::PlayPause => "Play",
            Button::Undo => "Undo",
            Button::Reset => "Reset",
            Button::SlowDown => "Speed -",
            Button::SpeedUp => "Speed +",
        }
    }
}

/// A decoded device event
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer button went down at a position relative to the drawing area
    PointerPressed(Point),
    /// A bound key was pressed
    KeyPressed(Key),
    /// A control button was clicked
    ButtonClicked(Button),
}

/// Axis aligned rectangle, `y` grows downwards
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Whether `point` lies inside, edges included
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x <= self.x + self.width
            && self.y <= point.y
            && point.y <= self.y + self.height
    }
}

/// Placement of the control buttons for a drawing area of a given size
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    /// Width of the drawing area
    pub width: f32,
    /// Height of the drawing area
    pub height: f32,
}

impl Layout {
    /// Layout for a drawing area of `width` by `height`
    pub fn new(width: f32, height: f32) -> Self {
        Layout { width, height }
    }

    /// Upper edge of the strip reserved for buttons.
    ///
    /// Pointer presses at or below it never become control points.
    pub fn strip_top(&self) -> f32 {
        self.height - BUTTON_HEIGHT - GAP
    }

    /// Where `button` is drawn
    pub fn button_rect(&self, button: Button) -> Rect {
        // Play, undo and reset are packed to the left, the speed buttons to the right
        let x = match button {
            Button::PlayPause => GAP,
            Button::Undo => GAP + (BUTTON_WIDTH + GAP),
            Button::Reset => GAP + 2.0 * (BUTTON_WIDTH + GAP),
            Button::SlowDown => self.width - 2.0 * (BUTTON_WIDTH + GAP),
            Button::SpeedUp => self.width - (BUTTON_WIDTH + GAP),
        };
        Rect {
            x,
            y: self.strip_top(),
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
    }
}

/// Maps [`InputEvent`]s to [`Command`]s
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionMapper {
    layout: Layout,
}

impl InteractionMapper {
    /// Mapper suppressing pointer presses on `layout`'s button strip
    pub fn new(layout: Layout) -> Self {
        InteractionMapper { layout }
    }

    /// The button layout this mapper suppresses pointer presses for
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Updates the layout after the drawing area changed its size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout = Layout::new(width, height);
    }

    /// The command `event` stands for, if any
    pub fn map(&self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerPressed(point) if point.y < self.layout.strip_top() => {
                Some(Command::Append(point))
            }
            InputEvent::PointerPressed(_) => None,
            InputEvent::KeyPressed(key) => Some(match key {
                Key::Space => Command::TogglePlay,
                Key::U => Command::Undo,
                Key::R => Command::Reset,
                Key::Equal => Command::IncreaseSpeed,
                Key::Minus => Command::DecreaseSpeed,
            }),
            InputEvent::ButtonClicked(button) => Some(button.command()),
        }
    }
}
