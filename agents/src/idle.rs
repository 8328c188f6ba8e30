// ═══════════════════════════════════════════════════════════════════════
// Idle Agent — issues no commands at all.
// The floor of the leaderboard: whatever territory the starting
// garrison holds on its own.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use hexfront_engine::{FactionId, Game};

pub struct IdleAgent {
    faction: FactionId,
}

impl IdleAgent {
    pub fn new(faction: FactionId) -> Self {
        IdleAgent { faction }
    }
}

impl Agent for IdleAgent {
    fn name(&self) -> &str {
        "Idle"
    }

    fn faction(&self) -> FactionId {
        self.faction
    }

    fn take_turn(&mut self, _game: &mut Game) {}
}
