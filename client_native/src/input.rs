//! Keyboard input handling

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use game_core::InputFrame;

/// Tracks held keys and press edges between simulation ticks.
///
/// A key enters the pressed set only on the not-held to held transition, so
/// OS key repeat while a key stays down never re-fires an edge-triggered
/// action. Press edges are dropped after the tick that consumed them.
#[derive(Debug, Default)]
pub struct InputTracker {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: KeyCode) {
        if self.held.insert(code) {
            self.pressed.insert(code);
        }
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// Sample the intents for the next simulation tick
    pub fn frame(&self) -> InputFrame {
        InputFrame {
            move_left: self.any_held(&[KeyCode::ArrowLeft, KeyCode::KeyA]),
            move_right: self.any_held(&[KeyCode::ArrowRight, KeyCode::KeyD]),
            jump_pressed: self.any_pressed(&[KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW]),
        }
    }

    /// Clear press edges once the tick that sampled them has run
    pub fn end_tick(&mut self) {
        self.pressed.clear();
    }

    fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.held.contains(c))
    }

    fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.pressed.contains(c))
    }
}
