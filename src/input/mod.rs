//! Input state tracker - keyboard, mouse and controllers
//!
//! Host events write the "current" buffers at any time between ticks.
//! Down / pressed / released are derived from current vs previous and never
//! stored. `end_frame` is the only writer of "previous" and runs exactly once
//! per tick, after every entity has stepped.

mod buttons;
mod controllers;
mod mouse;

pub use buttons::ButtonStates;
pub use controllers::{ControllerHub, ControllerId};
pub use mouse::{MouseButton, MouseTracker};

/// All input state owned by one simulation instance.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keyboard: ButtonStates<String>,
    mouse_buttons: ButtonStates<MouseButton>,
    mouse: MouseTracker,
    controllers: ControllerHub,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Host events ===

    /// `code` is the DOM `KeyboardEvent.code` (e.g. "ArrowLeft", "Space").
    pub fn set_key_down(&mut self, code: &str, down: bool) {
        self.keyboard.set_down(code.to_owned(), down);
    }

    pub fn set_mouse_button_down(&mut self, button: MouseButton, down: bool) {
        self.mouse_buttons.set_down(button, down);
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse.on_move(x, y);
    }

    pub fn register_controller(&mut self, id: ControllerId) -> bool {
        self.controllers.register(id)
    }

    pub fn unregister_controller(&mut self, id: ControllerId) -> bool {
        self.controllers.unregister(id)
    }

    pub fn set_controller_input_down(&mut self, id: ControllerId, input: &str, down: bool) -> bool {
        self.controllers.set_down(id, input, down)
    }

    // === Keyboard ===

    pub fn key_down(&self, code: &str) -> bool {
        self.keyboard.is_down(code)
    }

    pub fn key_pressed(&self, code: &str) -> bool {
        self.keyboard.is_pressed(code)
    }

    pub fn key_released(&self, code: &str) -> bool {
        self.keyboard.is_released(code)
    }

    pub fn any_key_down(&self) -> bool {
        self.keyboard.any_down()
    }

    pub fn any_key_pressed(&self) -> bool {
        self.keyboard.any_pressed()
    }

    pub fn any_key_released(&self) -> bool {
        self.keyboard.any_released()
    }

    // === Mouse ===

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_down(&button)
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_pressed(&button)
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_released(&button)
    }

    pub fn any_mouse_down(&self) -> bool {
        self.mouse_buttons.any_down()
    }

    pub fn any_mouse_pressed(&self) -> bool {
        self.mouse_buttons.any_pressed()
    }

    pub fn any_mouse_released(&self) -> bool {
        self.mouse_buttons.any_released()
    }

    pub fn mouse(&self) -> &MouseTracker {
        &self.mouse
    }

    // === Controllers ===

    pub fn controller_down(&self, id: ControllerId, input: &str) -> bool {
        self.controllers.is_down(id, input)
    }

    pub fn controller_pressed(&self, id: ControllerId, input: &str) -> bool {
        self.controllers.is_pressed(id, input)
    }

    pub fn controller_released(&self, id: ControllerId, input: &str) -> bool {
        self.controllers.is_released(id, input)
    }

    pub fn any_controller_down(&self, input: &str) -> bool {
        self.controllers.any_down(input)
    }

    pub fn any_controller_pressed(&self, input: &str) -> bool {
        self.controllers.any_pressed(input)
    }

    pub fn any_controller_released(&self, input: &str) -> bool {
        self.controllers.any_released(input)
    }

    pub fn controllers(&self) -> impl Iterator<Item = ControllerId> + '_ {
        self.controllers.controllers()
    }

    // === Frame boundaries ===

    /// Start of the simulate phase: latch the mouse position.
    pub fn begin_frame(&mut self) {
        self.mouse.sample();
    }

    /// End of the simulate phase: current becomes previous for every class.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.mouse_buttons.end_frame();
        self.controllers.end_frame();
    }

    /// Drop held keys and buttons (host lost focus). Controllers stay registered.
    /// Held ones report released until the next `end_frame`.
    pub fn release_all(&mut self) {
        self.keyboard.release_all();
        self.mouse_buttons.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_releases_held_keys_on_the_next_step() {
        let mut input = InputState::new();
        input.set_key_down("Space", true);
        input.set_mouse_button_down(MouseButton::Left, true);
        input.end_frame();

        input.release_all();
        assert!(!input.key_down("Space"));
        assert!(input.key_released("Space"));
        assert!(input.mouse_released(MouseButton::Left));

        input.end_frame();
        assert!(!input.key_released("Space"));
        assert!(!input.any_key_down());
    }

    #[test]
    fn keyboard_edges_follow_frames() {
        let mut input = InputState::new();
        assert!(!input.key_down("Space"));
        assert!(!input.key_pressed("Space"));
        assert!(!input.key_released("Space"));

        input.set_key_down("Space", true);
        assert!(input.key_pressed("Space"));
        assert!(input.any_key_pressed());
        input.end_frame();
        assert!(input.key_down("Space"));
        assert!(!input.key_pressed("Space"));

        input.set_key_down("Space", false);
        assert!(input.key_released("Space"));
        input.end_frame();
        assert!(!input.key_released("Space"));
    }

    #[test]
    fn mouse_any_variants_union_buttons() {
        let mut input = InputState::new();
        input.set_mouse_button_down(MouseButton::Right, true);
        assert!(input.any_mouse_down());
        assert!(input.any_mouse_pressed());
        assert!(!input.mouse_down(MouseButton::Left));

        input.end_frame();
        input.set_mouse_button_down(MouseButton::Right, false);
        assert!(input.mouse_released(MouseButton::Right));
        assert!(input.any_mouse_released());
        assert!(!input.any_mouse_down());
    }

    #[test]
    fn release_all_keeps_controllers() {
        let mut input = InputState::new();
        let pad = ControllerId(1);
        input.register_controller(pad);
        input.set_controller_input_down(pad, "JUMP", true);
        input.set_key_down("KeyA", true);

        input.release_all();
        assert!(!input.key_down("KeyA"));
        assert!(input.controller_down(pad, "JUMP"));
        assert!(input.any_controller_down("JUMP"));
    }
}
