pub mod arena;
pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use resources::*;

use glam::UVec2;
use hecs::World;
use systems::*;

/// Run one tick of the platformer simulation.
///
/// Pure over its inputs: the same world state and input frame always produce
/// the same result. Step order is load-bearing - jump and drag read the
/// contact state from the previous tick, before this tick's ground
/// resolution overwrites it.
pub fn step(
    world: &mut World,
    tick: &mut Tick,
    arena: &Arena,
    config: &Config,
    input: &InputFrame,
    events: &mut Events,
) {
    // Clear events from the previous frame
    events.clear();

    // 1. Held movement keys overwrite horizontal velocity
    apply_move_intent(world, input, config);

    // 2. Jump fires against last tick's contact state
    apply_jump_intent(world, input, config, events);

    // 3. Gravity, every tick
    apply_gravity(world, config);

    // 4. Per-tick damping (horizontal factor also from last tick's contact)
    apply_drag(world, config);

    // 5. Integrate positions
    integrate(world);

    // 6. Resolve against the ground plane
    resolve_ground(world, arena, events);

    tick.advance();
}

/// Helper to create the player body at its spawn position
pub fn spawn_player(world: &mut World, config: &Config) -> hecs::Entity {
    let size = UVec2::splat(config.sprite_size);
    world.spawn((Body::new(config.spawn_pos(), size),))
}
