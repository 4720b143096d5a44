//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit millisecond clock passed into every entry point
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod boost;
pub mod collision;
pub mod schedule;
pub mod state;
pub mod tick;

pub use boost::BoostState;
pub use collision::collect_memes;
pub use schedule::{Scheduler, Task};
pub use state::{GameState, Meme, MemeKind, Player, RunPhase, Snapshot};
pub use tick::{HeldDirs, advance, apply_command};
