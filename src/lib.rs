//! Meme Trail - a retro top-down arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (game state, timer tasks, collection rules)
//! - `input`: Keyboard binding map and held-key tracking
//! - `render`: DOM presentation layer (wasm only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions in game units
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Player sprite size (square)
    pub const PLAYER_SIZE: f32 = 64.0;
    /// Distance moved per movement tick per held direction
    pub const PLAYER_STEP: f32 = 8.0;
    /// Player spawn/restart position
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 200.0;

    /// Meme sprite size (square)
    pub const MEME_SIZE: f32 = 24.0;
    /// Memes seeded when a run starts with an empty board
    pub const INITIAL_MEME_COUNT: usize = 3;
    /// Collection distance between player and meme positions
    pub const COLLECT_RADIUS: f32 = 40.0;
    /// Health restored per collected meme
    pub const HEALTH_PER_MEME: u8 = 1;

    /// Health meter maximum
    pub const HEALTH_MAX: u8 = 5;

    /// Movement tick cadence (~60 steps/sec)
    pub const MOVEMENT_INTERVAL_MS: u64 = 16;
    /// Health drain cadence at normal speed
    pub const BASE_DRAIN_INTERVAL_MS: u64 = 8000;
    /// Meme spawn cadence at normal speed
    pub const BASE_SPAWN_INTERVAL_MS: u64 = 3000;
    /// Meme age limit at normal speed
    pub const BASE_DESPAWN_AFTER_MS: u64 = 8000;
    /// Despawn sweep cadence (fixed; only the age limit scales)
    pub const DESPAWN_SWEEP_INTERVAL_MS: u64 = 1000;

    /// Cadence multiplier while the speed boost is active (40% faster)
    pub const SPEED_BOOST_MULTIPLIER: f32 = 0.6;
    /// Grace period before the boost turns off after leaving max health
    pub const BOOST_OFF_DELAY_MS: u64 = 1000;
}

/// Clamp a sprite's top-left position so a `size`-unit square stays in the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, consts::ARENA_WIDTH - size),
        pos.y.clamp(0.0, consts::ARENA_HEIGHT - size),
    )
}
