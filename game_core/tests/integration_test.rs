use game_core::*;
use glam::{UVec2, Vec2};
use hecs::World;

const IDLE: InputFrame = InputFrame {
    move_left: false,
    move_right: false,
    jump_pressed: false,
};

const JUMP: InputFrame = InputFrame {
    move_left: false,
    move_right: false,
    jump_pressed: true,
};

const RIGHT: InputFrame = InputFrame {
    move_left: false,
    move_right: true,
    jump_pressed: false,
};

fn setup() -> (World, Tick, Arena, Config, Events, hecs::Entity) {
    let config = Config::new();
    let arena = Arena::from_config(&config);
    let mut world = World::new();
    let player = spawn_player(&mut world, &config);
    (world, Tick::new(), arena, config, Events::new(), player)
}

fn body_of(world: &World, entity: hecs::Entity) -> Body {
    *world.get::<&Body>(entity).unwrap()
}

/// Scripted input pattern for long driven runs; aperiodic enough to mix
/// grounded running, airborne drift, and repeated jumps.
fn scripted_input(i: u64) -> InputFrame {
    InputFrame {
        move_left: i % 7 < 3,
        move_right: i % 5 < 2,
        jump_pressed: i % 11 == 0,
    }
}

#[test]
fn test_spawn_state() {
    let (world, _tick, arena, config, _events, player) = setup();
    let body = body_of(&world, player);

    assert_eq!(body.pos, Vec2::new(376.0, 504.0));
    assert_eq!(body.vel, Vec2::ZERO);
    assert_eq!(body.size, UVec2::splat(config.sprite_size));
    assert!(body.grounded());
    assert_eq!(body.bottom(), arena.bottom_y, "Spawn rests on the ground");
}

#[test]
fn test_ground_invariant_holds_under_scripted_input() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();

    for i in 0..600 {
        step(
            &mut world,
            &mut tick,
            &arena,
            &config,
            &scripted_input(i),
            &mut events,
        );

        let body = body_of(&world, player);
        assert!(
            body.bottom() <= arena.bottom_y,
            "Body penetrated the ground at tick {}",
            i
        );
        assert_eq!(
            body.bottom() == arena.bottom_y,
            body.grounded(),
            "Contact state out of sync with the ground at tick {}",
            i
        );
    }
}

#[test]
fn test_no_double_jump() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();

    // Leave the ground
    step(&mut world, &mut tick, &arena, &config, &JUMP, &mut events);
    assert!(!body_of(&world, player).grounded());

    // A second press while airborne must not re-fire: the velocity follows
    // gravity and drag only.
    let before = body_of(&world, player);
    step(&mut world, &mut tick, &arena, &config, &JUMP, &mut events);
    let after = body_of(&world, player);

    assert_eq!(after.vel.y, (before.vel.y + config.gravity) * config.drag);
    assert!(!events.jumped);
}

#[test]
fn test_stale_grounded_flag_above_ground_goes_airborne() {
    // A body flagged grounded but floating above the plane: gravity pulls it
    // down, and since 500 + 0.9 + 48 = 548.9 < 552 the clamp does not
    // trigger, so it ends the tick airborne.
    let config = Config::new();
    let arena = Arena::from_config(&config);
    let mut world = World::new();
    let player = world.spawn((Body::new(Vec2::new(376.0, 500.0), UVec2::splat(48)),));
    let mut tick = Tick::new();
    let mut events = Events::new();

    step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);

    let body = body_of(&world, player);
    assert_eq!(body.vel.y, config.gravity);
    assert_eq!(body.pos.y, 500.0 + config.gravity);
    assert!(!body.grounded());
}

#[test]
fn test_jump_first_tick_velocity_and_position() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();
    let spawn_y = body_of(&world, player).pos.y;

    step(&mut world, &mut tick, &arena, &config, &JUMP, &mut events);

    let body = body_of(&world, player);
    // Jump sets the velocity before gravity is added the same tick
    assert_eq!(body.vel.y, config.jump_power + config.gravity);
    assert_eq!(body.pos.y, spawn_y + (config.jump_power + config.gravity));
    assert!(!body.grounded());
    assert!(events.jumped);
}

#[test]
fn test_jump_events_are_per_tick() {
    let (mut world, mut tick, arena, config, mut events, _player) = setup();

    step(&mut world, &mut tick, &arena, &config, &JUMP, &mut events);
    assert!(events.jumped);

    step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);
    assert!(!events.jumped, "Events are cleared at the start of each step");
}

#[test]
fn test_jump_lands_back_on_ground() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();
    let spawn_y = body_of(&world, player).pos.y;

    step(&mut world, &mut tick, &arena, &config, &JUMP, &mut events);

    let mut landed_at = None;
    for i in 0..120 {
        step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);
        if events.landed {
            landed_at = Some(i);
            break;
        }
    }

    assert!(landed_at.is_some(), "Jump arc should return to the ground");
    let body = body_of(&world, player);
    assert!(body.grounded());
    assert_eq!(body.pos.y, spawn_y, "Clamp restores the exact rest height");
    assert_eq!(body.vel.y, 0.0);
}

#[test]
fn test_grounded_horizontal_decay_never_reaches_zero() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();
    for (_e, body) in world.query_mut::<&mut Body>() {
        body.vel.x = 6.0;
    }

    // With no input held, velocity follows 6 * ground_drag^n exactly
    let mut expected = 6.0_f32;
    for i in 0..50 {
        step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);
        expected *= config.ground_drag;

        let body = body_of(&world, player);
        assert_eq!(body.vel.x, expected, "Decay diverged at tick {}", i);
        assert!(body.vel.x > 0.0, "Drag approaches zero but never reaches it");
    }
}

#[test]
fn test_both_held_right_wins_through_full_step() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();

    let both = InputFrame {
        move_left: true,
        move_right: true,
        jump_pressed: false,
    };
    step(&mut world, &mut tick, &arena, &config, &both, &mut events);

    let body = body_of(&world, player);
    assert_eq!(body.vel.x, config.move_speed * config.ground_drag);
}

#[test]
fn test_velocity_persists_after_keys_released() {
    let (mut world, mut tick, arena, config, mut events, player) = setup();

    for _ in 0..3 {
        step(&mut world, &mut tick, &arena, &config, &RIGHT, &mut events);
    }

    let mut prev = body_of(&world, player).vel.x;
    assert!(prev > 0.0);

    for _ in 0..20 {
        step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);
        let vx = body_of(&world, player).vel.x;
        assert!(vx > 0.0, "No explicit stop: velocity only decays");
        assert!(vx < prev, "Ground drag keeps shrinking it");
        prev = vx;
    }
}

#[test]
fn test_deterministic_replay() {
    let run = || {
        let (mut world, mut tick, arena, config, mut events, player) = setup();
        let mut trace = Vec::new();
        for i in 0..200 {
            step(
                &mut world,
                &mut tick,
                &arena,
                &config,
                &scripted_input(i),
                &mut events,
            );
            let body = body_of(&world, player);
            trace.push((body.pos, body.vel, body.grounded()));
        }
        trace
    };

    assert_eq!(run(), run(), "Identical inputs give bit-identical traces");
}

#[test]
fn test_tick_counter_advances_once_per_step() {
    let (mut world, mut tick, arena, config, mut events, _player) = setup();

    step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);
    step(&mut world, &mut tick, &arena, &config, &IDLE, &mut events);

    assert_eq!(tick.count, 2);
}
