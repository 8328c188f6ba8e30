// ═══════════════════════════════════════════════════════════════════════
// Faction policy — the scripted turn of an AI faction
//
// An ordered chain of independent rules. Each rule is a pure function of
// (state, faction) — plus an rng for its probability gates — returning
// the commands it wants issued. The driver applies every command through
// the validated operations before the next rule runs, so later rules see
// the territory and resource state earlier rules left behind. Greedy,
// single pass, no lookahead beyond one hex of adjacency.
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;

use crate::catalog::{building_def, troop_def};
use crate::combat::{self, attack_power, defense_power};
use crate::economy;
use crate::grid;
use crate::navigation;
use crate::territory;
use crate::types::{Building, Command, FactionId, GameState, HexId, Owner, Terrain, TroopKind};

/// Run one complete policy turn for a scripted faction.
pub fn take_turn(state: &mut GameState, rng: &mut impl Rng, faction: FactionId) {
    economy::collect_resources(state, faction);
    if state.owned_hexes(faction).is_empty() {
        return; // eliminated
    }

    let cmds = ensure_barracks(state, faction);
    apply_all(state, rng, faction, cmds);
    let cmds = train_garrisons(state, faction, rng);
    apply_all(state, rng, faction, cmds);
    let cmds = claim_frontier(state, faction);
    apply_all(state, rng, faction, cmds);
    let cmds = fortify_border(state, faction, rng);
    apply_all(state, rng, faction, cmds);
    let cmds = found_market(state, faction, rng);
    apply_all(state, rng, faction, cmds);
    let cmds = launch_attacks(state, faction);
    apply_all(state, rng, faction, cmds);
    let cmds = advance_reserves(state, faction);
    apply_all(state, rng, faction, cmds);
}

/// Execute one command on behalf of a faction through the validated
/// operations. Returns whether the command took effect.
pub fn apply_command(
    state: &mut GameState,
    rng: &mut impl Rng,
    faction: FactionId,
    cmd: Command,
) -> bool {
    match cmd {
        Command::Claim { hex } => territory::claim(state, faction, hex),
        Command::Build { hex, building } => territory::build(state, faction, hex, building),
        Command::Train { hex, kind } => territory::train(state, faction, hex, kind),
        Command::Attack { from, to } => {
            if state.hex(from).owner != Owner::Faction(faction) {
                return false;
            }
            combat::resolve_attack(state, rng, from, to).is_some()
        }
        Command::Advance { from, to } => territory::move_troops(state, faction, from, to),
    }
}

fn apply_all(state: &mut GameState, rng: &mut impl Rng, faction: FactionId, cmds: Vec<Command>) {
    for cmd in cmds {
        apply_command(state, rng, faction, cmd);
    }
}

// ── Rule 1: guarantee a training site ──────────────────────────────────

/// If the faction has no barracks and no capital, put a barracks on the
/// first un-built, non-capital hex it owns, if affordable.
pub fn ensure_barracks(state: &GameState, faction: FactionId) -> Vec<Command> {
    let owned = state.owned_hexes(faction);
    let has_site = owned.iter().any(|&id| territory::is_training_site(state, id));
    if has_site {
        return Vec::new();
    }
    if !state.ledger(faction).covers(&building_def(Building::Barracks).cost) {
        return Vec::new();
    }
    owned
        .iter()
        .find(|&&id| {
            let h = state.hex(id);
            h.building.is_none() && !h.capital
        })
        .map(|&id| vec![Command::Build { hex: id, building: Building::Barracks }])
        .unwrap_or_default()
}

// ── Rule 2: train garrisons ────────────────────────────────────────────

/// At every training site: up to two infantry, then a 60%-gated cavalry
/// and a 40%-gated siege, each against a running budget so the whole
/// batch stays affordable. Roughly a 2 : 0.6 : 0.4 production ratio per
/// site per round.
pub fn train_garrisons(
    state: &GameState,
    faction: FactionId,
    rng: &mut impl Rng,
) -> Vec<Command> {
    let mut budget = *state.ledger(faction);
    let mut cmds = Vec::new();

    let sites: Vec<HexId> = state
        .owned_hexes(faction)
        .into_iter()
        .filter(|&id| territory::is_training_site(state, id))
        .collect();

    for site in sites {
        let infantry_cost = &troop_def(TroopKind::Infantry).cost;
        let mut trained = 0;
        while trained < 2 && budget.covers(infantry_cost) {
            budget.sub(infantry_cost);
            cmds.push(Command::Train { hex: site, kind: TroopKind::Infantry });
            trained += 1;
        }
        let cavalry_cost = &troop_def(TroopKind::Cavalry).cost;
        if budget.covers(cavalry_cost) && rng.gen_bool(0.6) {
            budget.sub(cavalry_cost);
            cmds.push(Command::Train { hex: site, kind: TroopKind::Cavalry });
        }
        let siege_cost = &troop_def(TroopKind::Siege).cost;
        if budget.covers(siege_cost) && rng.gen_bool(0.4) {
            budget.sub(siege_cost);
            cmds.push(Command::Train { hex: site, kind: TroopKind::Siege });
        }
    }
    cmds
}

// ── Rule 3: claim neutral frontier ─────────────────────────────────────

/// Per owned hex, claim the first affordable neutral neighbor. Runs per
/// hex, so one round can claim several hexes on a wide frontier.
pub fn claim_frontier(state: &GameState, faction: FactionId) -> Vec<Command> {
    let outpost_cost = &building_def(Building::Outpost).cost;
    let mut budget = *state.ledger(faction);
    let mut claimed: Vec<HexId> = Vec::new();
    let mut cmds = Vec::new();

    for id in state.owned_hexes(faction) {
        for n in grid::neighbors(id) {
            if !state.hex(n).owner.is_neutral() || claimed.contains(&n) {
                continue;
            }
            if budget.covers(outpost_cost) {
                budget.sub(outpost_cost);
                claimed.push(n);
                cmds.push(Command::Claim { hex: n });
                break;
            }
        }
    }
    cmds
}

// ── Rule 4: fortify the border ─────────────────────────────────────────

/// 50% chance per un-built border hex to raise a fort, stopping at the
/// first success. A border hex here touches enemy territory; hexes that
/// only touch neutral ground are not worth the stone yet.
pub fn fortify_border(state: &GameState, faction: FactionId, rng: &mut impl Rng) -> Vec<Command> {
    let fort_cost = &building_def(Building::Fort).cost;
    for id in state.owned_hexes(faction) {
        if !touches_enemy(state, id, faction) {
            continue;
        }
        if state.hex(id).building.is_some() || !state.ledger(faction).covers(fort_cost) {
            continue;
        }
        if rng.gen_bool(0.5) {
            return vec![Command::Build { hex: id, building: Building::Fort }];
        }
    }
    Vec::new()
}

// ── Rule 5: found a market ─────────────────────────────────────────────

/// 40% chance per round to put a market on the first un-built,
/// non-capital plains hex.
pub fn found_market(state: &GameState, faction: FactionId, rng: &mut impl Rng) -> Vec<Command> {
    if !rng.gen_bool(0.4) {
        return Vec::new();
    }
    let market_cost = &building_def(Building::Market).cost;
    state
        .owned_hexes(faction)
        .into_iter()
        .find(|&id| {
            let h = state.hex(id);
            h.building.is_none() && !h.capital && h.terrain == Terrain::Plains
        })
        .filter(|_| state.ledger(faction).covers(market_cost))
        .map(|id| vec![Command::Build { hex: id, building: Building::Market }])
        .unwrap_or_default()
}

// ── Rule 6: attacks ────────────────────────────────────────────────────

struct AttackCandidate {
    from: HexId,
    to: HexId,
    atk: u32,
    def: u32,
}

/// Enumerate every legal attack pair, rank by attack/defense ratio, and
/// pick up to two. Skips defenders already struck this round, attackers
/// whose stack is already spent, and anything with attack power under
/// 60% of the defense — hopeless attacks just burn troops.
pub fn launch_attacks(state: &GameState, faction: FactionId) -> Vec<Command> {
    let mut candidates = Vec::new();
    for id in state.owned_hexes(faction) {
        if state.hex(id).troops.is_empty() {
            continue;
        }
        let atk = attack_power(state.hex(id));
        for n in grid::neighbors(id) {
            if state.hex(n).owner != Owner::Faction(faction) {
                candidates.push(AttackCandidate {
                    from: id,
                    to: n,
                    atk,
                    def: defense_power(state.hex(n)),
                });
            }
        }
    }

    // Descending atk/def ratio, compared by cross-multiplication so the
    // ordering is exact.
    candidates.sort_by(|a, b| {
        let lhs = b.atk as u64 * a.def.max(1) as u64;
        let rhs = a.atk as u64 * b.def.max(1) as u64;
        lhs.cmp(&rhs)
    });

    let mut cmds = Vec::new();
    let mut struck: Vec<HexId> = Vec::new();
    let mut spent: Vec<HexId> = Vec::new();
    for c in candidates {
        if cmds.len() >= 2 {
            break;
        }
        if struck.contains(&c.to) || spent.contains(&c.from) {
            continue;
        }
        if (c.atk as u64) * 10 < (c.def as u64) * 6 {
            continue;
        }
        struck.push(c.to);
        spent.push(c.from);
        cmds.push(Command::Attack { from: c.from, to: c.to });
    }
    cmds
}

// ── Rule 7: advance reserves ───────────────────────────────────────────

/// Push idle interior stacks one step toward the frontier. A stack moves
/// only when the first step of its shortest owned path is itself
/// frontier-adjacent; deeper reserves hold position.
pub fn advance_reserves(state: &GameState, faction: FactionId) -> Vec<Command> {
    let mut cmds = Vec::new();
    for id in state.owned_hexes(faction) {
        if state.hex(id).troops.is_empty() || touches_frontier(state, id, faction) {
            continue;
        }
        let step = navigation::first_step_toward(
            state,
            id,
            |h| h.owner == Owner::Faction(faction),
            |h| {
                h.owner == Owner::Faction(faction)
                    && touches_frontier(state, grid::hex_id(h.col, h.row), faction)
            },
        );
        if let Some(to) = step {
            if touches_frontier(state, to, faction) {
                cmds.push(Command::Advance { from: id, to });
            }
        }
    }
    cmds
}

// ── Shared predicates ──────────────────────────────────────────────────

/// Any neighbor held by a different faction (neutral does not count).
pub fn touches_enemy(state: &GameState, id: HexId, faction: FactionId) -> bool {
    grid::neighbors(id).iter().any(|&n| match state.hex(n).owner {
        Owner::Faction(f) => f != faction,
        Owner::Neutral => false,
    })
}

/// Any neighbor not held by this faction — enemy or neutral ground.
pub fn touches_frontier(state: &GameState, id: HexId, faction: FactionId) -> bool {
    grid::neighbors(id)
        .iter()
        .any(|&n| state.hex(n).owner != Owner::Faction(faction))
}
