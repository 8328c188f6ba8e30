// ═══════════════════════════════════════════════════════════════════════
// Combat — derived power stats and single-shot attack resolution
//
// An attack is one roll, not a multi-round exchange. The power ratio
// dominates but two independent uniform multipliers in [0.7, 1.3) keep
// upsets possible. Loss ratios, ceil rounding, and the total emptying
// of the losing stack are exact behavioral contracts.
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;

use crate::catalog::CAPITAL_DEFENSE_BONUS;
use crate::grid;
use crate::types::{CombatReport, GameState, HexId, HexState, Owner, TroopKind};

/// Offensive strength of a stack: 3·infantry + 5·cavalry + 7·siege.
pub fn attack_power(hex: &HexState) -> u32 {
    hex.troops.infantry * 3 + hex.troops.cavalry * 5 + hex.troops.siege * 7
}

/// Defensive strength: 3·infantry + 2·cavalry + 1·siege, plus the hex's
/// accumulated fortification bonus, plus a flat capital bonus.
pub fn defense_power(hex: &HexState) -> u32 {
    let mut d = hex.troops.infantry * 3 + hex.troops.cavalry * 2 + hex.troops.siege;
    d += hex.defense_bonus;
    if hex.capital {
        d += CAPITAL_DEFENSE_BONUS;
    }
    d
}

/// Resolve an attack from `from` onto `to`. Returns None if the attack
/// is illegal: `from` must be faction-owned with a non-empty stack, `to`
/// must have a different owner (foreign or neutral) and be a direct
/// neighbor.
pub fn resolve_attack(
    state: &mut GameState,
    rng: &mut impl Rng,
    from: HexId,
    to: HexId,
) -> Option<CombatReport> {
    let Owner::Faction(attacker) = state.hex(from).owner else {
        return None;
    };
    if state.hex(to).owner == Owner::Faction(attacker) {
        return None;
    }
    if state.hex(from).troops.is_empty() {
        return None;
    }
    if !grid::is_adjacent(from, to) {
        return None;
    }

    let atk_pow = attack_power(state.hex(from));
    let def_pow = defense_power(state.hex(to));
    let atk_roll = atk_pow as f64 * rng.gen_range(0.7..1.3);
    let def_roll = def_pow as f64 * rng.gen_range(0.7..1.3);

    let defender = state.hex(to).owner;

    if atk_roll > def_roll {
        // Attacker takes the hex. Survivors redeploy forward onto the
        // capture; the origin is left empty. Capture strips the
        // defender's building, fortifications, and capital status.
        let loss_ratio = (def_pow as f64 / (atk_pow + 1) as f64 * 0.6).min(0.8);
        let mut surviving = state.hex(from).troops;
        for kind in TroopKind::ALL {
            let count = surviving.get(kind);
            let lost = (count as f64 * loss_ratio).ceil() as u32;
            *surviving.get_mut(kind) = count.saturating_sub(lost);
        }
        let target = state.hex_mut(to);
        target.owner = Owner::Faction(attacker);
        target.troops = surviving;
        target.building = None;
        target.defense_bonus = 0;
        target.capital = false;
        state.hex_mut(from).troops.clear();
        Some(CombatReport { victory: true, attacker, defender })
    } else {
        // Defense holds. The defender bleeds proportionally; a failed
        // attack destroys the entire attacking stack regardless of how
        // close the roll was.
        let loss_ratio = (atk_pow as f64 / (def_pow + 1) as f64 * 0.7).min(0.9);
        let target = state.hex_mut(to);
        for kind in TroopKind::ALL {
            let count = target.troops.get(kind);
            let lost = (count as f64 * loss_ratio).ceil() as u32;
            *target.troops.get_mut(kind) = count.saturating_sub(lost);
        }
        state.hex_mut(from).troops.clear();
        Some(CombatReport { victory: false, attacker, defender })
    }
}
