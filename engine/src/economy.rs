// ═══════════════════════════════════════════════════════════════════════
// Economy — per-round resource collection and atomic spending
// ═══════════════════════════════════════════════════════════════════════

use crate::catalog::{terrain_production, MARKET_GOLD_BONUS};
use crate::types::{Building, FactionId, GameState, Owner, Resources};

/// Credit one round of production to a faction: terrain yield of every
/// owned hex, plus the gold bonus of every owned market. Called once per
/// faction per round.
pub fn collect_resources(state: &mut GameState, faction: FactionId) {
    let mut income = Resources::default();
    for hex in &state.hexes {
        if hex.owner != Owner::Faction(faction) {
            continue;
        }
        income.add(&terrain_production(hex.terrain));
        if hex.building == Some(Building::Market) {
            income.gold += MARKET_GOLD_BONUS;
        }
    }
    state.ledger_mut(faction).add(&income);
}

pub fn can_afford(state: &GameState, faction: FactionId, cost: &Resources) -> bool {
    state.ledger(faction).covers(cost)
}

/// Check-then-spend in one step. Either the full cost is debited or the
/// ledger is untouched; a partial spend is never observable.
pub fn try_spend(state: &mut GameState, faction: FactionId, cost: &Resources) -> bool {
    let ledger = state.ledger_mut(faction);
    if !ledger.covers(cost) {
        return false;
    }
    ledger.sub(cost);
    true
}
