// ═══════════════════════════════════════════════════════════════════════
// Random Agent — throws random commands at the engine.
// Serves as baseline and for testing engine validation stability:
// illegal picks must bounce off without corrupting state.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use hexfront_engine::{grid, Building, FactionId, Game, Owner, TroopKind};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Command attempts per turn. Most fail validation; that is the point.
const ATTEMPTS_PER_TURN: usize = 8;

pub struct RandomAgent {
    faction: FactionId,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(faction: FactionId, seed: u64) -> Self {
        RandomAgent { faction, rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn faction(&self) -> FactionId {
        self.faction
    }

    fn take_turn(&mut self, game: &mut Game) {
        for _ in 0..ATTEMPTS_PER_TURN {
            let owned = game.state().owned_hexes(self.faction);
            let Some(&from) = owned.choose(&mut self.rng) else {
                return; // eliminated
            };
            match self.rng.gen_range(0..4) {
                0 => {
                    // Claim a random neighbor (only neutral ones succeed).
                    if let Some(&target) = grid::neighbors(from).choose(&mut self.rng) {
                        game.claim_hex(target, self.faction);
                    }
                }
                1 => {
                    let options = [Building::Fort, Building::Barracks, Building::Market];
                    if let Some(&building) = options.choose(&mut self.rng) {
                        game.build_on(from, building);
                    }
                }
                2 => {
                    if let Some(&kind) = TroopKind::ALL.choose(&mut self.rng) {
                        game.train_troop(from, kind);
                    }
                }
                _ => {
                    let targets: Vec<_> = grid::neighbors(from)
                        .into_iter()
                        .filter(|&n| game.hex(n).owner != Owner::Faction(self.faction))
                        .collect();
                    if let Some(&to) = targets.choose(&mut self.rng) {
                        game.attack(from, to);
                    }
                }
            }
        }
    }
}
