// ═══════════════════════════════════════════════════════════════════════
// Static catalog — all fixed configuration in one place.
// Terrain production, building and troop tables, starting stock,
// faction roster, round limit. Nothing here changes during a game.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{Building, FactionId, Resources, Terrain, TroopKind};

// ── Global configuration ───────────────────────────────────────────────

pub const MAX_ROUNDS: u32 = 30;

pub const STARTING_STOCK: Resources = Resources { food: 10, ore: 8, wood: 8, gold: 6 };

/// Flat defense added per fort purchase (stacking).
pub const FORT_DEFENSE_BONUS: u32 = 5;
/// Flat defense a capital contributes on top of its garrison.
pub const CAPITAL_DEFENSE_BONUS: u32 = 5;
/// Extra gold per owned market per round.
pub const MARKET_GOLD_BONUS: u32 = 2;

// ── Factions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct FactionDef {
    pub name: &'static str,
    /// Scripted factions take their turn inside end_turn; the human seat
    /// is driven from outside through the command API.
    pub scripted: bool,
}

pub static FACTIONS: [FactionDef; 3] = [
    FactionDef { name: "Empire", scripted: false },
    FactionDef { name: "Dominion", scripted: true },
    FactionDef { name: "Horde", scripted: true },
];

pub fn faction_def(id: FactionId) -> &'static FactionDef {
    &FACTIONS[id.0 as usize]
}

pub fn faction_ids() -> impl Iterator<Item = FactionId> {
    (0..FACTIONS.len() as u8).map(FactionId)
}

pub fn scripted_factions() -> impl Iterator<Item = FactionId> {
    faction_ids().filter(|f| faction_def(*f).scripted)
}

// ── Terrain production ─────────────────────────────────────────────────

/// Per-turn yield of one owned hex of the given terrain.
pub fn terrain_production(terrain: Terrain) -> Resources {
    match terrain {
        Terrain::Plains => Resources { food: 0, ore: 0, wood: 0, gold: 2 },
        Terrain::Farm => Resources { food: 3, ore: 0, wood: 0, gold: 0 },
        Terrain::Mine => Resources { food: 0, ore: 3, wood: 0, gold: 0 },
        Terrain::Forest => Resources { food: 0, ore: 0, wood: 3, gold: 0 },
    }
}

// ── Buildings ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct BuildingDef {
    pub label: &'static str,
    pub cost: Resources,
}

pub fn building_def(building: Building) -> &'static BuildingDef {
    match building {
        Building::Outpost => &BuildingDef {
            label: "Outpost",
            cost: Resources { food: 2, ore: 1, wood: 2, gold: 0 },
        },
        Building::Fort => &BuildingDef {
            label: "Fort",
            cost: Resources { food: 0, ore: 3, wood: 3, gold: 1 },
        },
        Building::Barracks => &BuildingDef {
            label: "Barracks",
            cost: Resources { food: 1, ore: 2, wood: 2, gold: 1 },
        },
        Building::Market => &BuildingDef {
            label: "Market",
            cost: Resources { food: 0, ore: 1, wood: 2, gold: 2 },
        },
    }
}

// ── Troops ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct TroopDef {
    pub label: &'static str,
    pub cost: Resources,
    pub attack: u32,
    pub defense: u32,
}

// Deliberately asymmetric roles: siege is the best attacker, infantry
// the most balanced defender, cavalry a fast but fragile attacker.
pub fn troop_def(kind: TroopKind) -> &'static TroopDef {
    match kind {
        TroopKind::Infantry => &TroopDef {
            label: "Infantry",
            cost: Resources { food: 2, ore: 1, wood: 0, gold: 1 },
            attack: 3,
            defense: 3,
        },
        TroopKind::Cavalry => &TroopDef {
            label: "Cavalry",
            cost: Resources { food: 3, ore: 0, wood: 0, gold: 2 },
            attack: 5,
            defense: 2,
        },
        TroopKind::Siege => &TroopDef {
            label: "Siege",
            cost: Resources { food: 1, ore: 3, wood: 2, gold: 2 },
            attack: 7,
            defense: 1,
        },
    }
}
