use glam::{UVec2, Vec2};

use crate::Config;

/// Ground-contact state for a body.
///
/// An explicit state rather than a flag: the horizontal damping factor
/// already differs per state, and the variant picks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Grounded,
    Airborne,
}

impl Contact {
    /// Horizontal damping factor applied while in this state
    pub fn horizontal_drag(&self, config: &Config) -> f32 {
        match self {
            Contact::Grounded => config.ground_drag,
            Contact::Airborne => config.drag,
        }
    }
}

/// The player body - the single kinematic object in the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner in screen pixels (y grows downward)
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Sprite extent in pixels
    pub size: UVec2,
    pub contact: Contact,
}

impl Body {
    /// Create a body at rest on the ground
    pub fn new(pos: Vec2, size: UVec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            contact: Contact::Grounded,
        }
    }

    pub fn grounded(&self) -> bool {
        self.contact == Contact::Grounded
    }

    /// Y coordinate of the body's bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_grounded_at_rest() {
        let body = Body::new(Vec2::new(10.0, 20.0), UVec2::splat(48));
        assert_eq!(body.vel, Vec2::ZERO);
        assert!(body.grounded());
        assert_eq!(body.bottom(), 68.0);
    }

    #[test]
    fn test_horizontal_drag_selects_per_state() {
        let config = Config::new();
        assert_eq!(
            Contact::Grounded.horizontal_drag(&config),
            config.ground_drag
        );
        assert_eq!(Contact::Airborne.horizontal_drag(&config), config.drag);
    }
}
