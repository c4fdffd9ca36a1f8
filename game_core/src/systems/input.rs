use crate::{Body, Config, Events, InputFrame};
use hecs::World;

/// Apply held movement keys to horizontal velocity.
///
/// Right is checked second and wins when both keys are held. With neither
/// held the previous velocity is left in place; drag alone decays it.
pub fn apply_move_intent(world: &mut World, input: &InputFrame, config: &Config) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        if input.move_left {
            body.vel.x = -config.move_speed;
        }
        if input.move_right {
            body.vel.x = config.move_speed;
        }
    }
}

/// Fire a jump if the body was grounded entering this tick.
///
/// The contact state read here is last tick's - this runs before this
/// tick's ground resolution, so a mid-air press is a no-op.
pub fn apply_jump_intent(
    world: &mut World,
    input: &InputFrame,
    config: &Config,
    events: &mut Events,
) {
    if !input.jump_pressed {
        return;
    }
    for (_entity, body) in world.query_mut::<&mut Body>() {
        if body.grounded() {
            body.vel.y = config.jump_power;
            events.jumped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Contact;
    use glam::{UVec2, Vec2};

    fn world_with_body(contact: Contact) -> (World, hecs::Entity) {
        let mut world = World::new();
        let mut body = Body::new(Vec2::new(100.0, 100.0), UVec2::splat(48));
        body.contact = contact;
        let entity = world.spawn((body,));
        (world, entity)
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let config = Config::new();
        let (mut world, entity) = world_with_body(Contact::Grounded);

        let input = InputFrame {
            move_left: true,
            move_right: true,
            jump_pressed: false,
        };
        apply_move_intent(&mut world, &input, &config);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.vel.x, config.move_speed, "Right overwrites left");
    }

    #[test]
    fn test_no_intent_preserves_velocity() {
        let config = Config::new();
        let (mut world, entity) = world_with_body(Contact::Grounded);
        for (_e, body) in world.query_mut::<&mut Body>() {
            body.vel.x = 3.5;
        }

        apply_move_intent(&mut world, &InputFrame::new(), &config);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.vel.x, 3.5, "Released keys do not zero velocity");
    }

    #[test]
    fn test_airborne_jump_is_no_op() {
        let config = Config::new();
        let mut events = Events::new();
        let (mut world, entity) = world_with_body(Contact::Airborne);
        for (_e, body) in world.query_mut::<&mut Body>() {
            body.vel.y = 2.0;
        }

        let input = InputFrame {
            move_left: false,
            move_right: false,
            jump_pressed: true,
        };
        apply_jump_intent(&mut world, &input, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.vel.y, 2.0, "No double jump");
        assert!(!events.jumped);
    }

    #[test]
    fn test_grounded_jump_sets_vertical_velocity() {
        let config = Config::new();
        let mut events = Events::new();
        let (mut world, entity) = world_with_body(Contact::Grounded);

        let input = InputFrame {
            move_left: false,
            move_right: false,
            jump_pressed: true,
        };
        apply_jump_intent(&mut world, &input, &config, &mut events);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.vel.y, config.jump_power);
        assert!(events.jumped);
    }
}
