//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse left widget bounds
    MouseLeave,
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Right button
    Right,
    /// Middle button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mouse_move() {
        let e = Event::MouseMove {
            position: Point::new(100.0, 200.0),
        };
        if let Event::MouseMove { position } = e {
            assert_eq!(position.x, 100.0);
            assert_eq!(position.y, 200.0);
        } else {
            panic!("Expected MouseMove event");
        }
    }

    #[test]
    fn test_event_mouse_button() {
        let e = Event::MouseDown {
            position: Point::new(50.0, 50.0),
            button: MouseButton::Left,
        };
        if let Event::MouseDown { button, .. } = e {
            assert_eq!(button, MouseButton::Left);
        } else {
            panic!("Expected MouseDown event");
        }
    }

    #[test]
    fn test_event_mouse_leave_eq() {
        assert_eq!(Event::MouseLeave, Event::MouseLeave);
    }
}
