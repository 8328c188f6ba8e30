// ═══════════════════════════════════════════════════════════════════════
// Core types — factions, terrain, buildings, troops, and the game state
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Faction ID ─────────────────────────────────────────────────────────
// Compact, copyable faction identifier. Index into catalog::FACTIONS and
// into the per-faction ledger vector.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct FactionId(pub u8);

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::catalog::faction_def(*self).name)
    }
}

// ── Hex ID ─────────────────────────────────────────────────────────────
// Row-major index into GameState::hexes (id = row * GRID_COLS + col).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct HexId(pub u16);

// ── Enums ──────────────────────────────────────────────────────────────

/// Who holds a hex. Neutral hexes have no ledger and never act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Neutral,
    Faction(FactionId),
}

impl Owner {
    pub fn faction(self) -> Option<FactionId> {
        match self {
            Owner::Neutral => None,
            Owner::Faction(f) => Some(f),
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Owner::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Plains,
    Farm,
    Mine,
    Forest,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [Terrain::Plains, Terrain::Farm, Terrain::Mine, Terrain::Forest];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    Outpost,
    Fort,
    Barracks,
    Market,
}

impl Building {
    pub const ALL: [Building; 4] =
        [Building::Outpost, Building::Fort, Building::Barracks, Building::Market];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TroopKind {
    Infantry,
    Cavalry,
    Siege,
}

impl TroopKind {
    pub const ALL: [TroopKind; 3] = [TroopKind::Infantry, TroopKind::Cavalry, TroopKind::Siege];
}

// ── Troops ─────────────────────────────────────────────────────────────

/// Garrison of a single hex, by troop kind. Counts are unsigned by
/// construction — no mutation path can drive them below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Troops {
    pub infantry: u32,
    pub cavalry: u32,
    pub siege: u32,
}

impl Troops {
    pub fn get(&self, kind: TroopKind) -> u32 {
        match kind {
            TroopKind::Infantry => self.infantry,
            TroopKind::Cavalry => self.cavalry,
            TroopKind::Siege => self.siege,
        }
    }

    pub fn get_mut(&mut self, kind: TroopKind) -> &mut u32 {
        match kind {
            TroopKind::Infantry => &mut self.infantry,
            TroopKind::Cavalry => &mut self.cavalry,
            TroopKind::Siege => &mut self.siege,
        }
    }

    pub fn total(&self) -> u32 {
        self.infantry + self.cavalry + self.siege
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&mut self) {
        *self = Troops::default();
    }
}

// ── Resources ──────────────────────────────────────────────────────────

/// Four-component resource vector. Used both for faction ledgers and for
/// static cost/production entries in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub food: u32,
    pub ore: u32,
    pub wood: u32,
    pub gold: u32,
}

impl Resources {
    /// Component-wise ≥ comparison: can this stock pay that cost?
    pub fn covers(&self, cost: &Resources) -> bool {
        self.food >= cost.food
            && self.ore >= cost.ore
            && self.wood >= cost.wood
            && self.gold >= cost.gold
    }

    pub fn add(&mut self, other: &Resources) {
        self.food += other.food;
        self.ore += other.ore;
        self.wood += other.wood;
        self.gold += other.gold;
    }

    /// Component-wise debit. Callers must check `covers` first; the
    /// subtraction would underflow otherwise.
    pub fn sub(&mut self, cost: &Resources) {
        self.food -= cost.food;
        self.ore -= cost.ore;
        self.wood -= cost.wood;
        self.gold -= cost.gold;
    }
}

// ── Hex state ──────────────────────────────────────────────────────────

/// Dynamic per-hex state. Created once at map generation; only owner,
/// building, troops, capital, and defense_bonus mutate afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexState {
    pub col: u8,
    pub row: u8,
    pub terrain: Terrain,
    pub owner: Owner,
    pub building: Option<Building>,
    pub troops: Troops,
    pub capital: bool,
    pub defense_bonus: u32,
}

// ── Combat report ──────────────────────────────────────────────────────

/// Outcome of a resolved attack. The defender is an `Owner` because
/// neutral hexes can be attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub victory: bool,
    pub attacker: FactionId,
    pub defender: Owner,
}

// ── Winner ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Faction(FactionId),
    Draw,
}

// ── Commands ───────────────────────────────────────────────────────────

/// The discrete command vocabulary. The human seat and the scripted
/// policy both speak it; every command is validated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Claim { hex: HexId },
    Build { hex: HexId, building: Building },
    Train { hex: HexId, kind: TroopKind },
    Attack { from: HexId, to: HexId },
    Advance { from: HexId, to: HexId },
}

// ── Game state ─────────────────────────────────────────────────────────

/// The complete mutable world: one record, no globals. Serializing and
/// reloading a snapshot reproduces hex and ledger contents exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round, starting at 1.
    pub round: u32,
    /// All hexes, row-major. Indexed by HexId.
    pub hexes: Vec<HexState>,
    /// One ledger per faction. Indexed by FactionId.
    pub ledgers: Vec<Resources>,
    /// Recorded once the round limit is passed.
    pub winner: Option<Winner>,
}

impl GameState {
    /// Get a hex by id. Panics on an out-of-range id — that is a caller
    /// bug, not a game-rule rejection.
    pub fn hex(&self, id: HexId) -> &HexState {
        &self.hexes[id.0 as usize]
    }

    pub fn hex_mut(&mut self, id: HexId) -> &mut HexState {
        &mut self.hexes[id.0 as usize]
    }

    /// Get the resource ledger for a faction. Panics on an unknown id.
    pub fn ledger(&self, faction: FactionId) -> &Resources {
        &self.ledgers[faction.0 as usize]
    }

    pub fn ledger_mut(&mut self, faction: FactionId) -> &mut Resources {
        &mut self.ledgers[faction.0 as usize]
    }

    /// Ids of all hexes a faction currently owns, in hex order.
    pub fn owned_hexes(&self, faction: FactionId) -> Vec<HexId> {
        self.hexes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.owner == Owner::Faction(faction))
            .map(|(i, _)| HexId(i as u16))
            .collect()
    }

    /// Number of hexes a faction owns. Derived, never stored.
    pub fn territory_count(&self, faction: FactionId) -> usize {
        self.hexes
            .iter()
            .filter(|h| h.owner == Owner::Faction(faction))
            .count()
    }
}
