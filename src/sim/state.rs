//! Game state and core simulation types
//!
//! One `GameState` owns everything a run mutates. All writes flow through the
//! dispatch functions in `sim::tick`; nothing here touches the platform.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::boost::BoostState;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// Title screen, waiting for the start command
    Title,
    /// Active gameplay
    Running,
    /// Frozen mid-run; no timer task fires
    Paused,
    /// Health hit zero
    GameOver,
}

/// The fixed meme catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemeKind {
    Trollface,
    Doge,
    Pepe,
    Nyan,
    Rickroll,
    Stonks,
    Distracted,
    Drake,
}

impl MemeKind {
    pub const ALL: [MemeKind; 8] = [
        MemeKind::Trollface,
        MemeKind::Doge,
        MemeKind::Pepe,
        MemeKind::Nyan,
        MemeKind::Rickroll,
        MemeKind::Stonks,
        MemeKind::Distracted,
        MemeKind::Drake,
    ];

    /// Sprite key for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MemeKind::Trollface => "trollface",
            MemeKind::Doge => "doge",
            MemeKind::Pepe => "pepe",
            MemeKind::Nyan => "nyan",
            MemeKind::Rickroll => "rickroll",
            MemeKind::Stonks => "stonks",
            MemeKind::Distracted => "distracted",
            MemeKind::Drake => "drake",
        }
    }

    /// Parse a sprite key; unknown keys are ignored rather than an error
    pub fn from_str(s: &str) -> Option<Self> {
        MemeKind::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// The player sprite
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left position in arena coordinates
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        }
    }
}

impl Player {
    /// Move by `delta`, keeping the full sprite inside the arena
    pub fn translate(&mut self, delta: Vec2) {
        self.pos = crate::clamp_to_arena(self.pos + delta, PLAYER_SIZE);
    }
}

/// A collectible meme entity
#[derive(Debug, Clone, Serialize)]
pub struct Meme {
    pub id: u32,
    /// Top-left position in arena coordinates
    pub pos: Vec2,
    pub kind: MemeKind,
    /// Clock reading at spawn, for the despawn sweep
    pub spawned_at_ms: u64,
}

impl Meme {
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.spawned_at_ms)
    }
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Run state machine
    pub phase: RunPhase,
    pub player: Player,
    /// Health meter, always in `0..=HEALTH_MAX`
    pub health: u8,
    /// Total memes collected this run
    pub memes_collected: u32,
    /// Every collected kind, oldest first
    pub inventory: Vec<MemeKind>,
    /// Live memes, ordered by id
    pub memes: Vec<Meme>,
    /// Speed-boost rule state
    pub boost: BoostState,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Title,
            player: Player::default(),
            health: HEALTH_MAX,
            memes_collected: 0,
            inventory: Vec::new(),
            memes: Vec::new(),
            boost: BoostState::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True while gameplay ticks may mutate state
    pub fn gameplay_active(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Append one meme with random position and kind
    pub fn spawn_meme(&mut self, now_ms: u64) {
        let x = self.rng.random_range(0.0..ARENA_WIDTH - MEME_SIZE);
        let y = self.rng.random_range(0.0..ARENA_HEIGHT - MEME_SIZE);
        let kind = MemeKind::ALL[self.rng.random_range(0..MemeKind::ALL.len())];
        let id = self.next_entity_id();
        self.memes.push(Meme {
            id,
            pos: Vec2::new(x, y),
            kind,
            spawned_at_ms: now_ms,
        });
    }

    /// Seed the opening board if it is empty
    pub fn seed_initial_memes(&mut self, now_ms: u64) {
        if self.memes.is_empty() {
            for _ in 0..INITIAL_MEME_COUNT {
                self.spawn_meme(now_ms);
            }
        }
    }

    /// Reset all run data for a restart. The caller decides the next phase;
    /// the RNG keeps rolling so consecutive runs differ.
    pub fn reset_run(&mut self) {
        self.player = Player::default();
        self.health = HEALTH_MAX;
        self.memes_collected = 0;
        self.inventory.clear();
        self.memes.clear();
        self.boost = BoostState::default();
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.pos,
            health: self.health,
            health_max: HEALTH_MAX,
            memes_collected: self.memes_collected,
            inventory: self.inventory.clone(),
            memes: self
                .memes
                .iter()
                .map(|m| MemeView {
                    id: m.id,
                    pos: m.pos,
                    kind: m.kind,
                })
                .collect(),
            started: self.phase != RunPhase::Title,
            paused: self.phase == RunPhase::Paused,
            over: self.phase == RunPhase::GameOver,
            speed_boost: self.boost.is_active(),
        }
    }
}

/// A meme as seen by the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct MemeView {
    pub id: u32,
    pub pos: Vec2,
    pub kind: MemeKind,
}

/// Read-only per-frame view handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: Vec2,
    pub health: u8,
    pub health_max: u8,
    pub memes_collected: u32,
    pub inventory: Vec<MemeKind>,
    pub memes: Vec<MemeView>,
    pub started: bool,
    pub paused: bool,
    pub over: bool,
    pub speed_boost: bool,
}

impl Snapshot {
    /// JSON dump for debugging and the headless demo
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_on_title() {
        let state = GameState::new(1);
        assert_eq!(state.phase, RunPhase::Title);
        assert_eq!(state.health, HEALTH_MAX);
        assert_eq!(state.memes_collected, 0);
        assert!(state.inventory.is_empty());
        assert!(state.memes.is_empty());
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert!(!state.boost.is_active());
    }

    #[test]
    fn spawned_memes_stay_in_bounds() {
        let mut state = GameState::new(7);
        for _ in 0..200 {
            state.spawn_meme(0);
        }
        for meme in &state.memes {
            assert!(meme.pos.x >= 0.0 && meme.pos.x < ARENA_WIDTH - MEME_SIZE);
            assert!(meme.pos.y >= 0.0 && meme.pos.y < ARENA_HEIGHT - MEME_SIZE);
        }
    }

    #[test]
    fn spawn_sequence_is_deterministic_per_seed() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..20 {
            a.spawn_meme(0);
            b.spawn_meme(0);
        }
        for (ma, mb) in a.memes.iter().zip(b.memes.iter()) {
            assert_eq!(ma.pos, mb.pos);
            assert_eq!(ma.kind, mb.kind);
        }
    }

    #[test]
    fn seed_initial_memes_only_fills_empty_board() {
        let mut state = GameState::new(3);
        state.seed_initial_memes(0);
        assert_eq!(state.memes.len(), INITIAL_MEME_COUNT);
        state.seed_initial_memes(0);
        assert_eq!(state.memes.len(), INITIAL_MEME_COUNT);
    }

    #[test]
    fn reset_run_clears_everything() {
        let mut state = GameState::new(5);
        state.spawn_meme(0);
        state.health = 1;
        state.memes_collected = 9;
        state.inventory.push(MemeKind::Doge);
        state.player.translate(Vec2::new(300.0, 100.0));

        state.reset_run();
        assert_eq!(state.health, HEALTH_MAX);
        assert_eq!(state.memes_collected, 0);
        assert!(state.inventory.is_empty());
        assert!(state.memes.is_empty());
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert!(!state.boost.is_active());
    }

    #[test]
    fn entity_ids_are_unique_across_reset() {
        let mut state = GameState::new(5);
        state.spawn_meme(0);
        state.spawn_meme(0);
        let last_id = state.memes.last().map(|m| m.id);
        state.reset_run();
        state.spawn_meme(0);
        assert!(state.memes[0].id > last_id.unwrap());
    }

    #[test]
    fn player_translate_clamps_to_arena() {
        let mut player = Player::default();
        player.translate(Vec2::new(-10_000.0, -10_000.0));
        assert_eq!(player.pos, Vec2::new(0.0, 0.0));
        player.translate(Vec2::new(10_000.0, 10_000.0));
        assert_eq!(
            player.pos,
            Vec2::new(ARENA_WIDTH - PLAYER_SIZE, ARENA_HEIGHT - PLAYER_SIZE)
        );
    }

    #[test]
    fn meme_kind_round_trips_known_keys() {
        for kind in MemeKind::ALL {
            assert_eq!(MemeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(MemeKind::from_str("wojak"), None);
    }
}
