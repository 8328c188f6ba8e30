// ═══════════════════════════════════════════════════════════════════════
// Territory operations — claim, build, train, move
//
// Every operation validates first and mutates only on success. A false
// return is a routine game-rule rejection and leaves all state exactly
// as it was.
// ═══════════════════════════════════════════════════════════════════════

use crate::catalog::{building_def, troop_def, FORT_DEFENSE_BONUS};
use crate::economy;
use crate::grid;
use crate::types::{Building, FactionId, GameState, HexId, Owner, TroopKind};

/// Claim a neutral hex by founding an outpost on it. Requires an owned
/// neighbor and the outpost cost.
pub fn claim(state: &mut GameState, faction: FactionId, hex: HexId) -> bool {
    if !state.hex(hex).owner.is_neutral() {
        return false;
    }
    let adjacent_owned = grid::neighbors(hex)
        .iter()
        .any(|&n| state.hex(n).owner == Owner::Faction(faction));
    if !adjacent_owned {
        return false;
    }
    if !economy::try_spend(state, faction, &building_def(Building::Outpost).cost) {
        return false;
    }
    let h = state.hex_mut(hex);
    h.owner = Owner::Faction(faction);
    h.building = Some(Building::Outpost);
    true
}

/// Construct a building on an owned hex. An already-built hex rejects
/// everything except another fort on a fort: forts stack, each purchase
/// adding a flat defense increment. Outposts only arise through `claim`.
pub fn build(state: &mut GameState, faction: FactionId, hex: HexId, building: Building) -> bool {
    if building == Building::Outpost {
        return false;
    }
    if state.hex(hex).owner != Owner::Faction(faction) {
        return false;
    }
    match (state.hex(hex).building, building) {
        (None, _) | (Some(Building::Fort), Building::Fort) => {}
        _ => return false,
    }
    if !economy::try_spend(state, faction, &building_def(building).cost) {
        return false;
    }
    let h = state.hex_mut(hex);
    h.building = Some(building);
    if building == Building::Fort {
        h.defense_bonus += FORT_DEFENSE_BONUS;
    }
    true
}

/// Train one troop of the given kind. Only barracks hexes and capitals
/// are training sites (capitals train for free in the sense of needing
/// no barracks, not of waiving the troop cost).
pub fn train(state: &mut GameState, faction: FactionId, hex: HexId, kind: TroopKind) -> bool {
    if state.hex(hex).owner != Owner::Faction(faction) {
        return false;
    }
    if !is_training_site(state, hex) {
        return false;
    }
    if !economy::try_spend(state, faction, &troop_def(kind).cost) {
        return false;
    }
    *state.hex_mut(hex).troops.get_mut(kind) += 1;
    true
}

pub fn is_training_site(state: &GameState, hex: HexId) -> bool {
    let h = state.hex(hex);
    h.building == Some(Building::Barracks) || h.capital
}

/// Move an entire stack between two adjacent hexes of the same faction.
pub fn move_troops(state: &mut GameState, faction: FactionId, from: HexId, to: HexId) -> bool {
    if from == to
        || state.hex(from).owner != Owner::Faction(faction)
        || state.hex(to).owner != Owner::Faction(faction)
        || state.hex(from).troops.is_empty()
        || !grid::is_adjacent(from, to)
    {
        return false;
    }
    let moving = state.hex(from).troops;
    for kind in TroopKind::ALL {
        *state.hex_mut(to).troops.get_mut(kind) += moving.get(kind);
    }
    state.hex_mut(from).troops.clear();
    true
}
