/// All game entity types — pure data, no logic.

pub type Rgb = (u8, u8, u8);

// ── Game flow ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Guessing,
    Won,
}

/// Result of the most recent guess, drives the feedback line.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    NoMessage,
    TooHigh { guess: u32, remaining: u32 },
    TooLow { guess: u32, remaining: u32 },
    Correct { guess: u32, attempts: u32 },
    OutOfAttempts { target: u32 },
}

/// A discrete input, already translated from the keyboard.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// Typed character; only ASCII digits are accepted into the buffer.
    AppendDigit(char),
    Delete,
    Confirm,
    Restart,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Secret number in `TARGET_MIN..=TARGET_MAX`, fixed for the round.
    pub target: u32,
    pub attempts: u32,
    /// In-progress guess: at most `MAX_INPUT_LEN` ASCII digits.
    pub input: String,
    pub outcome: Outcome,
    pub phase: Phase,
}

// ── Particles ─────────────────────────────────────────────────────────────────

/// Decorative falling leaf.  Never destroyed; respawned above the top edge
/// once it falls out of view.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafParticle {
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    /// Always positive (leaves only fall).
    pub speed_y: f32,
    pub size: u32,
    pub color: Rgb,
    /// Degrees in `[0, 360)`.
    pub rotation: f32,
    pub rot_speed: f32,
}

/// One spark of a win burst.
#[derive(Clone, Debug, PartialEq)]
pub struct FireworkParticle {
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub size: u32,
    pub color: Rgb,
    /// Ticks left; the particle is dropped once this reaches zero.
    pub life: i32,
    /// Opacity.  Decays independently of `life` and may hit zero first.
    pub alpha: u8,
}

// ── Master state ──────────────────────────────────────────────────────────────

/// Everything the frame driver owns.  Cloneable so the pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct World {
    pub game: GameState,
    pub leaves: Vec<LeafParticle>,
    pub fireworks: Vec<FireworkParticle>,
    /// True from burst creation until its last particle expires.
    pub show_fireworks: bool,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
