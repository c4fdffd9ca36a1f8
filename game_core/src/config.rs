use glam::Vec2;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;

    // Player sprite extent (square)
    pub const SPRITE_SIZE: u32 = 48;

    // Physics (pixels/tick and per-tick damping factors)
    pub const GRAVITY: f32 = 0.9;
    pub const DRAG: f32 = 1.0;
    pub const GROUND_DRAG: f32 = 0.9;
    pub const JUMP_POWER: f32 = -14.0; // negative = up
    pub const MOVE_SPEED: f32 = 6.0;
}

/// Game configuration, fixed at session start
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub sprite_size: u32,
    pub gravity: f32,
    pub drag: f32,
    pub ground_drag: f32,
    pub jump_power: f32,
    pub move_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            sprite_size: Params::SPRITE_SIZE,
            gravity: Params::GRAVITY,
            drag: Params::DRAG,
            ground_drag: Params::GROUND_DRAG,
            jump_power: Params::JUMP_POWER,
            move_speed: Params::MOVE_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn position: horizontally centred, resting on the ground plane
    pub fn spawn_pos(&self) -> Vec2 {
        Vec2::new(
            ((self.window_width - self.sprite_size) / 2) as f32,
            (self.window_height - 2 * self.sprite_size) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;

    #[test]
    fn test_config_spawn_is_centred() {
        let config = Config::new();
        assert_eq!(config.spawn_pos().x, 376.0, "Spawn X for 800px window");
    }

    #[test]
    fn test_config_spawn_rests_on_ground() {
        let config = Config::new();
        let arena = Arena::from_config(&config);
        let bottom = config.spawn_pos().y + config.sprite_size as f32;
        assert_eq!(bottom, arena.bottom_y, "Spawn bottom edge sits on ground");
    }
}
