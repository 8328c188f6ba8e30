// ═══════════════════════════════════════════════════════════════════════
// Navigation — breadth-first movement queries over the hex grid
// ═══════════════════════════════════════════════════════════════════════

use std::collections::VecDeque;

use crate::grid::{self, NUM_HEXES};
use crate::types::{GameState, HexId, HexState};

/// First step of a shortest path from `from` to any hex satisfying
/// `goal`, traversing only hexes satisfying `passable` (the start and
/// goal hexes are exempt from the passability check). Neighbors expand
/// in direction-table order, so results are deterministic. Returns None
/// when no goal is reachable.
pub fn first_step_toward(
    state: &GameState,
    from: HexId,
    passable: impl Fn(&HexState) -> bool,
    goal: impl Fn(&HexState) -> bool,
) -> Option<HexId> {
    let mut visited = vec![false; NUM_HEXES];
    // first_step[i] = the neighbor of `from` through which i was reached
    let mut first_step: Vec<Option<HexId>> = vec![None; NUM_HEXES];
    let mut queue = VecDeque::new();

    visited[from.0 as usize] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for next in grid::neighbors(current) {
            if visited[next.0 as usize] {
                continue;
            }
            visited[next.0 as usize] = true;
            let step = if current == from { next } else { first_step[current.0 as usize]? };
            first_step[next.0 as usize] = Some(step);

            if goal(state.hex(next)) {
                return Some(step);
            }
            if passable(state.hex(next)) {
                queue.push_back(next);
            }
        }
    }
    None
}
