use serde::{Deserialize, Serialize};

/// Mouse buttons as numbered by DOM `MouseEvent.button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Back,
    Forward,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Back,
        MouseButton::Forward,
    ];

    /// Unknown codes (extra buttons on exotic mice) map to `None`.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            3 => Some(MouseButton::Back),
            4 => Some(MouseButton::Forward),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        self as i16
    }
}

/// Mouse position sampled once per simulate phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseTracker {
    pub x: f32,
    pub y: f32,
    pub previous_x: f32,
    pub previous_y: f32,
    last_move: Option<(f32, f32)>,
}

impl MouseTracker {
    /// Record a host move event. Takes effect at the next [`MouseTracker::sample`].
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.last_move = Some((x, y));
    }

    /// Shift current into previous and adopt the latest move event.
    /// Without any move event yet the position stays at the origin.
    pub fn sample(&mut self) {
        self.previous_x = self.x;
        self.previous_y = self.y;
        let (x, y) = self.last_move.unwrap_or((0.0, 0.0));
        self.x = x;
        self.y = y;
    }

    pub fn delta(&self) -> (f32, f32) {
        (self.x - self.previous_x, self.y - self.previous_y)
    }
}
