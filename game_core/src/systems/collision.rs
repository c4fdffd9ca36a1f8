use crate::{Arena, Body, Contact, Events};
use hecs::World;

/// Resolve collision against the ground plane and update the contact state.
///
/// The only collision test in the simulation; runs unconditionally after
/// integration. Penetration is clamped out, so the ground invariant
/// (`bottom() <= arena.bottom_y`) holds exactly after every step.
pub fn resolve_ground(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        if body.bottom() >= arena.bottom_y {
            body.pos.y = arena.bottom_y - body.size.y as f32;
            body.vel.y = 0.0;
            if !body.grounded() {
                events.landed = true;
            }
            body.contact = Contact::Grounded;
        } else {
            body.contact = Contact::Airborne;
        }
    }
}
