/// Fixed game parameters.
///
/// The logical screen is 800×600 world units; the terminal renderer projects
/// it onto whatever cell grid is available.

use std::time::Duration;

// ── Screen & timing ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FPS: u32 = 60;

/// Target wall-clock length of one tick.
pub fn frame_duration() -> Duration {
    Duration::from_secs(1) / FPS
}

// ── Rules ─────────────────────────────────────────────────────────────────────

pub const MAX_ATTEMPTS: u32 = 8;
pub const TARGET_MIN: u32 = 1;
pub const TARGET_MAX: u32 = 100;
/// Enough for "100".
pub const MAX_INPUT_LEN: usize = 3;

// ── Leaves ────────────────────────────────────────────────────────────────────

pub const LEAF_COUNT: usize = 30;
pub const LEAF_SIZE: (u32, u32) = (8, 15);
/// Horizontal spawn margin beyond either screen edge.
pub const LEAF_SPAWN_MARGIN_X: i32 = 20;
pub const LEAF_SPAWN_Y: (i32, i32) = (-50, -10);
/// A leaf this far below the bottom edge is sent back to the top.
pub const LEAF_RESPAWN_BELOW: f32 = 20.0;
pub const LEAF_FALL_SPEED: (f32, f32) = (0.5, 1.2);
pub const LEAF_DRIFT_SPEED: (f32, f32) = (-0.3, 0.3);
pub const LEAF_SPIN_SPEED: (f32, f32) = (-1.0, 1.0);

// ── Fireworks ─────────────────────────────────────────────────────────────────

pub const FIREWORK_COUNT: usize = 150;
pub const FIREWORK_SIZE: (u32, u32) = (3, 6);
pub const FIREWORK_SPEED: (f32, f32) = (2.0, 5.0);
pub const FIREWORK_LIFE: (i32, i32) = (60, 120);
pub const GRAVITY: f32 = 0.05;
pub const ALPHA_DECAY: u8 = 2;

// ── Palette ───────────────────────────────────────────────────────────────────

pub const COLOR_BG: (u8, u8, u8) = (240, 248, 230);
pub const COLOR_WOOD: (u8, u8, u8) = (139, 69, 19);
pub const COLOR_WOOD_LIGHT: (u8, u8, u8) = (178, 102, 28);
pub const COLOR_TEXT: (u8, u8, u8) = (50, 100, 30);
pub const COLOR_PROMPT_CORRECT: (u8, u8, u8) = (34, 139, 34);
pub const COLOR_PROMPT_HIGH: (u8, u8, u8) = (205, 92, 92);
pub const COLOR_PROMPT_LOW: (u8, u8, u8) = (70, 130, 180);
