// ═══════════════════════════════════════════════════════════════════════
// Policy Agent — plays the human seat with the scripted faction policy.
// Reuses the engine's rule chain, applying each emitted command through
// the public Game API so the seat is validated exactly like a person
// clicking the same buttons.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use hexfront_engine::{ai, Command, FactionId, Game};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct PolicyAgent {
    faction: FactionId,
    rng: ChaCha8Rng,
}

impl PolicyAgent {
    pub fn new(faction: FactionId, seed: u64) -> Self {
        PolicyAgent { faction, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    fn apply(&self, game: &mut Game, cmds: Vec<Command>) {
        for cmd in cmds {
            match cmd {
                Command::Claim { hex } => {
                    game.claim_hex(hex, self.faction);
                }
                Command::Build { hex, building } => {
                    game.build_on(hex, building);
                }
                Command::Train { hex, kind } => {
                    game.train_troop(hex, kind);
                }
                Command::Attack { from, to } => {
                    game.attack(from, to);
                }
                // The player command surface has no troop movement, so
                // reserves stay garrisoned where they were trained.
                Command::Advance { .. } => {}
            }
        }
    }
}

impl Agent for PolicyAgent {
    fn name(&self) -> &str {
        "Policy"
    }

    fn faction(&self) -> FactionId {
        self.faction
    }

    fn take_turn(&mut self, game: &mut Game) {
        let f = self.faction;
        let cmds = ai::ensure_barracks(game.state(), f);
        self.apply(game, cmds);
        let cmds = ai::train_garrisons(game.state(), f, &mut self.rng);
        self.apply(game, cmds);
        let cmds = ai::claim_frontier(game.state(), f);
        self.apply(game, cmds);
        let cmds = ai::fortify_border(game.state(), f, &mut self.rng);
        self.apply(game, cmds);
        let cmds = ai::found_market(game.state(), f, &mut self.rng);
        self.apply(game, cmds);
        let cmds = ai::launch_attacks(game.state(), f);
        self.apply(game, cmds);
    }
}
