// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds the initial state for a fresh map
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;

use crate::catalog::{FACTIONS, STARTING_STOCK};
use crate::grid::{self, GRID_COLS, GRID_ROWS, NUM_HEXES};
use crate::types::{Building, FactionId, GameState, HexState, Owner, Terrain, Troops};

/// Starting hexes per faction; the first entry is the capital.
const START_POSITIONS: [[(u8, u8); 3]; 3] = [
    [(2, 2), (3, 2), (2, 3)],
    [(17, 2), (16, 2), (17, 3)],
    [(9, 12), (10, 12), (9, 11)],
];

/// Create the initial game state: full neutral map with random terrain,
/// then each faction's capital and two flanking hexes. The rng is the
/// game's single entropy source, shared with combat and the policy.
pub fn create_initial_state(rng: &mut impl Rng) -> GameState {
    let mut hexes = Vec::with_capacity(NUM_HEXES);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            hexes.push(HexState {
                col,
                row,
                terrain: Terrain::ALL[rng.gen_range(0..Terrain::ALL.len())],
                owner: Owner::Neutral,
                building: None,
                troops: Troops::default(),
                capital: false,
                defense_bonus: 0,
            });
        }
    }

    let mut state = GameState {
        round: 1,
        hexes,
        ledgers: vec![STARTING_STOCK; FACTIONS.len()],
        winner: None,
    };

    for (f, positions) in START_POSITIONS.iter().enumerate() {
        let faction = FactionId(f as u8);
        for (i, &(col, row)) in positions.iter().enumerate() {
            let hex = state.hex_mut(grid::hex_id(col, row));
            hex.owner = Owner::Faction(faction);
            if i == 0 {
                // Capital: fortified, with a barracks and a small garrison.
                hex.capital = true;
                hex.building = Some(Building::Barracks);
                hex.defense_bonus = 5;
                hex.troops.infantry = 3;
            } else {
                hex.troops.infantry = 1;
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_initial_map_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = create_initial_state(&mut rng);
        assert_eq!(state.hexes.len(), NUM_HEXES);
        assert_eq!(state.ledgers.len(), 3);
        assert_eq!(state.round, 1);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_capitals_placed() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = create_initial_state(&mut rng);
        for f in 0..3u8 {
            let faction = FactionId(f);
            let capitals: Vec<_> = state
                .hexes
                .iter()
                .filter(|h| h.capital && h.owner == Owner::Faction(faction))
                .collect();
            assert_eq!(capitals.len(), 1, "faction {f} should have exactly one capital");
            let cap = capitals[0];
            assert_eq!(cap.building, Some(Building::Barracks));
            assert_eq!(cap.defense_bonus, 5);
            assert_eq!(cap.troops.infantry, 3);
            assert_eq!(state.territory_count(faction), 3);
        }
    }

    #[test]
    fn test_starting_stock() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = create_initial_state(&mut rng);
        for ledger in &state.ledgers {
            assert_eq!(*ledger, STARTING_STOCK);
        }
    }

    #[test]
    fn test_deterministic_seed() {
        let mut r1 = ChaCha8Rng::seed_from_u64(123);
        let mut r2 = ChaCha8Rng::seed_from_u64(123);
        let s1 = create_initial_state(&mut r1);
        let s2 = create_initial_state(&mut r2);
        assert_eq!(s1, s2, "same seed must produce an identical map");
    }
}
