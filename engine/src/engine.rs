// ═══════════════════════════════════════════════════════════════════════
// Turn engine — the public face of one running game
//
// Architecture:
//   `Game` owns the explicit state record and the single seeded rng.
//   During the open-ended player phase the human seat issues validated
//   commands through the methods below; `end_turn` then runs the whole
//   transition — human income, every scripted faction's policy chain,
//   round increment, win check — to completion as one atomic step.
//   Expected rule violations come back as a false/None result and leave
//   state untouched; only an out-of-range hex id panics, since that is
//   a caller bug rather than a game-rule rejection.
// ═══════════════════════════════════════════════════════════════════════

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai;
use crate::catalog::{self, MAX_ROUNDS};
use crate::combat;
use crate::economy;
use crate::setup;
use crate::territory;
use crate::types::{
    Building, CombatReport, FactionId, GameState, HexId, HexState, Owner, Resources, TroopKind,
    Winner,
};

pub struct Game {
    state: GameState,
    rng: ChaCha8Rng,
}

impl Game {
    /// Start a fresh game. The seed fixes map generation, every combat
    /// roll, and every policy gate for the life of the game.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = setup::create_initial_state(&mut rng);
        Game { state, rng }
    }

    /// Resume from a state snapshot with a fresh entropy source.
    pub fn from_snapshot(state: GameState, seed: u64) -> Self {
        Game { state, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Claim a neutral hex for a faction by founding an outpost.
    pub fn claim_hex(&mut self, hex: HexId, faction: FactionId) -> bool {
        territory::claim(&mut self.state, faction, hex)
    }

    /// Construct on an owned hex; the owner pays.
    pub fn build_on(&mut self, hex: HexId, building: Building) -> bool {
        match self.state.hex(hex).owner {
            Owner::Faction(f) => territory::build(&mut self.state, f, hex, building),
            Owner::Neutral => false,
        }
    }

    /// Train one troop at a barracks or capital hex; the owner pays.
    pub fn train_troop(&mut self, hex: HexId, kind: TroopKind) -> bool {
        match self.state.hex(hex).owner {
            Owner::Faction(f) => territory::train(&mut self.state, f, hex, kind),
            Owner::Neutral => false,
        }
    }

    /// Attack an adjacent foreign or neutral hex. None means the attack
    /// was illegal and nothing happened.
    pub fn attack(&mut self, from: HexId, to: HexId) -> Option<CombatReport> {
        combat::resolve_attack(&mut self.state, &mut self.rng, from, to)
    }

    /// Close the player phase. Collects the human faction's income, runs
    /// the policy chain for each scripted faction in order (a later
    /// faction sees an earlier one's same-round moves), advances the
    /// round, and records the winner once the round limit is passed.
    /// Always succeeds; after the game has ended it does nothing.
    pub fn end_turn(&mut self) {
        if self.state.winner.is_some() {
            return;
        }
        for faction in catalog::faction_ids() {
            if !catalog::faction_def(faction).scripted {
                economy::collect_resources(&mut self.state, faction);
            }
        }
        for faction in catalog::scripted_factions() {
            ai::take_turn(&mut self.state, &mut self.rng, faction);
        }
        self.state.round += 1;
        if self.state.round > MAX_ROUNDS {
            self.state.winner = Some(evaluate_winner(&self.state));
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Panics on an out-of-range id.
    pub fn hex(&self, id: HexId) -> &HexState {
        self.state.hex(id)
    }

    pub fn hexes(&self) -> &[HexState] {
        &self.state.hexes
    }

    pub fn ledger(&self, faction: FactionId) -> &Resources {
        self.state.ledger(faction)
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// None until the game ends.
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    pub fn territory_count(&self, faction: FactionId) -> usize {
        self.state.territory_count(faction)
    }
}

/// Final standing: the faction with the strictly highest territory count
/// wins; an exact tie for the top leaves the game drawn.
pub fn evaluate_winner(state: &GameState) -> Winner {
    let mut best: Option<(FactionId, usize)> = None;
    let mut tied = false;
    for faction in catalog::faction_ids() {
        let count = state.territory_count(faction);
        match best {
            None => best = Some((faction, count)),
            Some((_, top)) if count > top => {
                best = Some((faction, count));
                tied = false;
            }
            Some((_, top)) if count == top => tied = true,
            Some(_) => {}
        }
    }
    match best {
        Some((faction, _)) if !tied => Winner::Faction(faction),
        _ => Winner::Draw,
    }
}
