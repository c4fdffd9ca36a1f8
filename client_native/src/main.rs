//! Native platformer client.
//!
//! Thin platform shell around the `game_core` simulation: a fixed-size
//! window, keyboard polling, and a wgpu sprite renderer, driven at one
//! simulation tick per rendered frame.

mod app;
mod camera;
mod error;
mod input;
mod mesh;
mod renderer;
mod sprite;

use winit::event_loop::EventLoop;

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let mut app = app::App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        std::process::exit(1);
    }

    // Startup failures abort inside `resumed`; report them once the loop
    // has unwound.
    if let Some(e) = app.take_fatal_error() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
