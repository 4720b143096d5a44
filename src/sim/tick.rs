//! Tick handlers and the dispatch funnel
//!
//! All mutation flows through two entry points driven by the platform loop:
//! `apply_command` for discrete inputs (start/pause/restart) and `advance`
//! for the per-frame poll that fires due timer tasks. Every gameplay tick is
//! guarded on the run being active, so a stale timer can never mutate a
//! paused or finished run.

use glam::Vec2;

use crate::consts::*;
use crate::input::{Command, Dir};

use super::boost::BoostChange;
use super::collision::collect_memes;
use super::schedule::{Scheduler, Task};
use super::state::{GameState, RunPhase};

/// Held directional keys, sampled by each movement tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirs {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirs {
    pub fn set(&mut self, dir: Dir, held: bool) {
        match dir {
            Dir::Up => self.up = held,
            Dir::Down => self.down = held,
            Dir::Left => self.left = held,
            Dir::Right => self.right = held,
        }
    }
}

/// Apply a discrete command. Commands issued outside their valid phase are
/// silently ignored.
pub fn apply_command(state: &mut GameState, sched: &mut Scheduler, cmd: Command, now_ms: u64) {
    match (cmd, state.phase) {
        (Command::Start, RunPhase::Title) => {
            state.phase = RunPhase::Running;
            state.seed_initial_memes(now_ms);
            arm_gameplay_tasks(state, sched, now_ms);
            log::info!("run started (seed {})", state.seed);
        }
        (Command::TogglePause, RunPhase::Running) => {
            state.phase = RunPhase::Paused;
            sched.cancel_all();
            log::info!("paused");
        }
        (Command::TogglePause, RunPhase::Paused) => {
            state.phase = RunPhase::Running;
            arm_gameplay_tasks(state, sched, now_ms);
            log::info!("resumed");
        }
        (Command::Restart, RunPhase::GameOver) => {
            state.reset_run();
            state.phase = RunPhase::Running;
            state.seed_initial_memes(now_ms);
            arm_gameplay_tasks(state, sched, now_ms);
            log::info!("restarted");
        }
        _ => {}
    }
}

/// Per-frame driver entry: re-evaluate the boost rule, then fire due tasks.
pub fn advance(state: &mut GameState, sched: &mut Scheduler, held: HeldDirs, now_ms: u64) {
    match state.boost.update(state.health, now_ms) {
        BoostChange::None => {}
        change => {
            log::info!(
                "speed boost {}; drain {}ms, spawn {}ms",
                if change == BoostChange::Activated { "on" } else { "off" },
                state.boost.drain_interval_ms(),
                state.boost.spawn_interval_ms(),
            );
            // Cancel-and-restart the dynamic cadences; the despawn threshold
            // is read live by the sweep and needs no rescheduling.
            if state.gameplay_active() {
                sched.arm(Task::Spawn, now_ms, state.boost.spawn_interval_ms());
                sched.arm(Task::HealthDrain, now_ms, state.boost.drain_interval_ms());
            }
        }
    }

    for task in sched.poll(now_ms) {
        match task {
            Task::Movement => tick_movement(state, held),
            Task::Spawn => tick_spawn(state, now_ms),
            Task::DespawnSweep => tick_despawn(state, now_ms),
            Task::HealthDrain => tick_drain(state),
        }
    }

    if state.phase == RunPhase::GameOver {
        sched.cancel_all();
    }
}

fn arm_gameplay_tasks(state: &GameState, sched: &mut Scheduler, now_ms: u64) {
    sched.arm(Task::Movement, now_ms, MOVEMENT_INTERVAL_MS);
    sched.arm(Task::Spawn, now_ms, state.boost.spawn_interval_ms());
    sched.arm(Task::DespawnSweep, now_ms, DESPAWN_SWEEP_INTERVAL_MS);
    sched.arm(Task::HealthDrain, now_ms, state.boost.drain_interval_ms());
}

/// Step the player by the held directions, clamp to the arena, then run the
/// collection pass. The pass runs even with nothing held so a meme spawning
/// under a stationary player is still picked up.
pub fn tick_movement(state: &mut GameState, held: HeldDirs) {
    if !state.gameplay_active() {
        return;
    }

    let mut delta = Vec2::ZERO;
    if held.up {
        delta.y -= PLAYER_STEP;
    }
    if held.down {
        delta.y += PLAYER_STEP;
    }
    if held.left {
        delta.x -= PLAYER_STEP;
    }
    if held.right {
        delta.x += PLAYER_STEP;
    }
    if delta != Vec2::ZERO {
        state.player.translate(delta);
    }

    collect_memes(state);
}

/// Append one randomly placed meme
pub fn tick_spawn(state: &mut GameState, now_ms: u64) {
    if !state.gameplay_active() {
        return;
    }
    state.spawn_meme(now_ms);
}

/// Remove every meme older than the current despawn threshold
pub fn tick_despawn(state: &mut GameState, now_ms: u64) {
    if !state.gameplay_active() {
        return;
    }
    let cutoff = state.boost.despawn_after_ms();
    state.memes.retain(|m| m.age_ms(now_ms) < cutoff);
}

/// Drop one health point; hitting zero ends the run
pub fn tick_drain(state: &mut GameState) {
    if !state.gameplay_active() {
        return;
    }
    state.health = state.health.saturating_sub(1);
    if state.health == 0 {
        state.phase = RunPhase::GameOver;
        log::info!("game over ({} memes collected)", state.memes_collected);
    }
}
