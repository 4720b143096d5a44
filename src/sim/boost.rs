//! Speed-boost rule
//!
//! A full health meter runs the world 40% faster: drain and spawn cadences
//! and the despawn age limit all scale by `SPEED_BOOST_MULTIPLIER`. Turning
//! on is immediate. Turning off waits `BOOST_OFF_DELAY_MS` below max health,
//! and the pending turn-off is canceled if the meter refills first.

use crate::consts::*;

/// Outcome of a boost re-evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostChange {
    None,
    Activated,
    Deactivated,
}

/// Derived boost state, re-evaluated against health at every dispatch
#[derive(Debug, Clone, Default)]
pub struct BoostState {
    active: bool,
    /// Deadline for the pending turn-off while health sits below max
    off_deadline_ms: Option<u64>,
}

impl BoostState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Re-evaluate against the current health reading
    pub fn update(&mut self, health: u8, now_ms: u64) -> BoostChange {
        if health == HEALTH_MAX {
            self.off_deadline_ms = None;
            if !self.active {
                self.active = true;
                return BoostChange::Activated;
            }
            return BoostChange::None;
        }

        if !self.active {
            return BoostChange::None;
        }

        match self.off_deadline_ms {
            None => {
                self.off_deadline_ms = Some(now_ms + BOOST_OFF_DELAY_MS);
                BoostChange::None
            }
            Some(deadline) if now_ms >= deadline => {
                self.active = false;
                self.off_deadline_ms = None;
                BoostChange::Deactivated
            }
            Some(_) => BoostChange::None,
        }
    }

    /// Scale a base duration by the boost multiplier when active
    pub fn scaled_ms(&self, base_ms: u64) -> u64 {
        if self.active {
            (base_ms as f32 * SPEED_BOOST_MULTIPLIER) as u64
        } else {
            base_ms
        }
    }

    pub fn drain_interval_ms(&self) -> u64 {
        self.scaled_ms(BASE_DRAIN_INTERVAL_MS)
    }

    pub fn spawn_interval_ms(&self) -> u64 {
        self.scaled_ms(BASE_SPAWN_INTERVAL_MS)
    }

    /// Age limit applied by the despawn sweep (the sweep cadence itself is fixed)
    pub fn despawn_after_ms(&self) -> u64 {
        self.scaled_ms(BASE_DESPAWN_AFTER_MS)
    }
}
