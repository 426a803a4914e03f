//! Fire-rate gate
//!
//! `Ready -> Cooling { fired_at }` on a successful shot, back to `Ready`
//! once strictly more than the cooldown has elapsed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FireGate {
    #[default]
    Ready,
    Cooling {
        /// Tick of the last shot (ms)
        fired_at: u64,
    },
}

impl FireGate {
    pub fn is_ready(&self) -> bool {
        matches!(self, FireGate::Ready)
    }

    /// Reopen the gate if the cooldown has elapsed at `now_ms`
    pub fn poll(&mut self, now_ms: u64, cooldown_ms: u64) {
        if let FireGate::Cooling { fired_at } = *self {
            if now_ms.saturating_sub(fired_at) > cooldown_ms {
                *self = FireGate::Ready;
            }
        }
    }

    /// Attempt a shot at `now_ms`. On success the gate starts cooling.
    pub fn try_fire(&mut self, now_ms: u64, cooldown_ms: u64) -> bool {
        self.poll(now_ms, cooldown_ms);
        if self.is_ready() {
            *self = FireGate::Cooling { fired_at: now_ms };
            true
        } else {
            false
        }
    }
}
