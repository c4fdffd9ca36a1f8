//! Application state and event loop handler

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use game_core::{spawn_player, step, Arena, Body, Config, Events, InputFrame, Tick};
use glam::Vec2;
use hecs::World;

use crate::error::ClientError;
use crate::input::InputTracker;
use crate::renderer::Renderer;
use crate::sprite::Sprite;

const WINDOW_TITLE: &str = "Hopper";
const SPRITE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/player.png");

/// Per-session simulation state, owned by the tick loop and passed into the
/// pure `step` by reference - no ambient globals.
struct Session {
    world: World,
    tick: Tick,
    arena: Arena,
    config: Config,
    events: Events,
    player: hecs::Entity,
}

impl Session {
    fn new(config: Config) -> Self {
        let arena = Arena::from_config(&config);
        let mut world = World::new();
        let player = spawn_player(&mut world, &config);
        Self {
            world,
            tick: Tick::new(),
            arena,
            config,
            events: Events::new(),
            player,
        }
    }

    fn step(&mut self, input: &InputFrame) {
        step(
            &mut self.world,
            &mut self.tick,
            &self.arena,
            &self.config,
            input,
            &mut self.events,
        );
    }

    fn player_pos(&self) -> Vec2 {
        self.world
            .get::<&Body>(self.player)
            .map(|body| body.pos)
            .unwrap_or(Vec2::ZERO)
    }
}

/// Main application state
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    session: Option<Session>,
    input: InputTracker,
    fatal: Option<ClientError>,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            session: None,
            input: InputTracker::new(),
            fatal: None,
        }
    }

    /// Startup error recorded before the event loop exited, if any
    pub fn take_fatal_error(&mut self) -> Option<ClientError> {
        self.fatal.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let mut config = Config::new();

        // The decoded asset drives the body extent and the border insets
        let sprite = Sprite::load(SPRITE_PATH)?;
        config.sprite_size = sprite.height;

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| ClientError::DisplayInit(format!("Failed to create window: {e}")))?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), &sprite))
            .map_err(ClientError::DisplayInit)?;

        self.session = Some(Session::new(config));
        self.window = Some(window);
        self.renderer = Some(renderer);
        log::info!("Window, renderer, and simulation initialized");

        Ok(())
    }

    /// One rendered frame = one simulation tick. The frame scheduler is the
    /// simulation clock; velocities are pixels per tick.
    fn redraw(&mut self) {
        let (Some(session), Some(renderer)) = (self.session.as_mut(), self.renderer.as_mut())
        else {
            return;
        };

        let frame = self.input.frame();
        session.step(&frame);
        self.input.end_tick();

        if session.events.jumped {
            log::debug!("jumped at tick {}", session.tick.count);
        }
        if session.events.landed {
            log::debug!("landed at tick {}", session.tick.count);
        }

        if let Err(e) = renderer.draw(session.player_pos()) {
            log::error!("render error: {e}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed if code == KeyCode::Escape => event_loop.exit(),
                ElementState::Pressed => self.input.key_down(code),
                ElementState::Released => self.input.key_up(code),
            },

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}
