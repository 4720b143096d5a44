//! Player-to-meme collection
//!
//! Runs after every movement tick: any meme within `COLLECT_RADIUS` of the
//! player is collected atomically in that tick — removed from the board,
//! counted, appended to the inventory, and worth one health point (capped).

use crate::consts::*;

use super::state::{GameState, MemeKind};

/// Collect every meme in range. Each meme is collected at most once; several
/// in range collect together in the same tick. Returns the collected kinds
/// in board order.
pub fn collect_memes(state: &mut GameState) -> Vec<MemeKind> {
    let player = state.player.pos;
    let mut collected = Vec::new();

    state.memes.retain(|meme| {
        if player.distance(meme.pos) < COLLECT_RADIUS {
            collected.push(meme.kind);
            false
        } else {
            true
        }
    });

    for &kind in &collected {
        state.memes_collected += 1;
        state.inventory.push(kind);
        state.health = (state.health + HEALTH_PER_MEME).min(HEALTH_MAX);
    }

    collected
}
