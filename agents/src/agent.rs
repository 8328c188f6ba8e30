// ═══════════════════════════════════════════════════════════════════════
// Agent trait — a driver for the human seat
//
// The engine runs the scripted factions itself inside end_turn; the
// human seat is an open player phase. An agent fills that phase by
// issuing commands through the public Game API, which validates every
// one of them — an agent can try anything and only legal commands take
// effect. The caller ends the turn afterwards.
// ═══════════════════════════════════════════════════════════════════════

use hexfront_engine::{FactionId, Game};

pub trait Agent: Send + Sync {
    /// Human-readable name (e.g. "Random", "Policy").
    fn name(&self) -> &str;

    /// The faction seat this agent occupies.
    fn faction(&self) -> FactionId;

    /// Issue this turn's commands. Called once per round, before the
    /// caller invokes `Game::end_turn`.
    fn take_turn(&mut self, game: &mut Game);
}
