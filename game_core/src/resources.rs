/// Simulation tick counter. One tick = one rendered frame; velocities are
/// pixels/tick, so there is no wall-clock delta anywhere in the core.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tick {
    pub count: u64,
}

impl Tick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.count += 1;
    }
}

/// Per-tick input intents, sampled by the platform layer before each step.
///
/// `move_left`/`move_right` are level-triggered (true every tick the key is
/// held). `jump_pressed` is edge-triggered: true only on the tick the jump
/// binding transitions to pressed. Producing that edge is the input layer's
/// job; the core trusts the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_pressed: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events raised during the most recent step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub jumped: bool,
    pub landed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = false;
        self.landed = false;
    }
}
