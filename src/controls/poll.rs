// Per-frame polling of physical inputs

use super::action::InputId;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Answers whether a physical input was pressed this frame
pub trait InputPoller {
    fn was_pressed(&self, input: &InputId) -> bool;
}

/// Tracks physical key and mouse state from winit events
///
/// Feed it events as they arrive and call `update` once at the end of
/// every frame.
#[derive(Debug, Default)]
pub struct KeyboardPoller {
    /// Inputs currently held down
    pressed: HashSet<InputId>,

    /// Inputs that went down this frame
    just_pressed: HashSet<InputId>,

    /// Inputs that went up this frame
    just_released: HashSet<InputId>,
}

impl KeyboardPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes map to inputs
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let input = InputId::from(key_code);
            match event.state {
                ElementState::Pressed => {
                    if !event.repeat {
                        self.press(input);
                    }
                }
                ElementState::Released => self.release(&input),
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, button: MouseButton, state: ElementState) {
        let input = InputId::from(button);
        match state {
            ElementState::Pressed => self.press(input),
            ElementState::Released => self.release(&input),
        }
    }

    /// Register an input going down
    pub fn press(&mut self, input: InputId) {
        if input.is_none() {
            return;
        }
        if self.pressed.insert(input.clone()) {
            self.just_pressed.insert(input);
        }
    }

    /// Register an input going up
    pub fn release(&mut self, input: &InputId) {
        if self.pressed.remove(input) {
            self.just_released.insert(input.clone());
        }
    }

    /// Whether an input is held down
    pub fn is_pressed(&self, input: &InputId) -> bool {
        self.pressed.contains(input)
    }

    /// Whether an input went up this frame
    pub fn just_released(&self, input: &InputId) -> bool {
        self.just_released.contains(input)
    }

    /// Start a new frame
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Forget all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl InputPoller for KeyboardPoller {
    fn was_pressed(&self, input: &InputId) -> bool {
        self.just_pressed.contains(input)
    }
}
