use crate::{Body, Config};
use hecs::World;

/// Apply gravity to vertical velocity, every tick, grounded or not.
/// Collision resolution re-clamps the resulting downward creep.
pub fn apply_gravity(world: &mut World, config: &Config) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.vel.y += config.gravity;
    }
}

/// Apply per-tick multiplicative damping. The horizontal factor depends on
/// the contact state from before this tick's ground resolution.
pub fn apply_drag(world: &mut World, config: &Config) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.vel.y *= config.drag;
        body.vel.x *= body.contact.horizontal_drag(config);
    }
}

/// Symplectic Euler position update: one tick of velocity
pub fn integrate(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        let vel = body.vel;
        body.pos += vel;
    }
}
