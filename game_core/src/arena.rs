use crate::Config;

/// Static world borders, inset one sprite extent from each window edge.
///
/// Only `bottom_y` is enforced by collision resolution. The other three
/// edges are declared for a full bounding-box test that does not exist yet;
/// they are kept correct but unused.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub top_y: f32,
    pub bottom_y: f32,
    pub left_x: f32,
    pub right_x: f32,
}

impl Arena {
    pub fn from_config(config: &Config) -> Self {
        let inset = config.sprite_size as f32;
        Self {
            top_y: inset,
            bottom_y: (config.window_height - config.sprite_size) as f32,
            left_x: inset,
            right_x: (config.window_width - config.sprite_size) as f32,
        }
    }

    /// Y coordinate of the ground plane
    pub fn ground_y(&self) -> f32 {
        self.bottom_y
    }
}
