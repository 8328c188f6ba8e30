// ═══════════════════════════════════════════════════════════════════════
// Game Runner — runs complete headless games
//
// One agent occupies the human seat; the two scripted factions play
// themselves inside end_turn. run_batch fans a range of seeds out
// across threads.
// ═══════════════════════════════════════════════════════════════════════

use hexfront_engine::catalog::{self, MAX_ROUNDS};
use hexfront_engine::{FactionId, Game, Resources, Winner};
use hexfront_agents::Agent;
use rayon::prelude::*;

/// Result of a completed game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub winner: Winner,
    pub rounds_played: u32,
    pub player_results: Vec<PlayerResult>,
}

#[derive(Debug, Clone)]
pub struct PlayerResult {
    pub faction: FactionId,
    pub agent_name: String,
    pub territory: usize,
    pub final_stock: Resources,
}

/// Label used when storing and printing a game outcome.
pub fn winner_label(winner: Winner) -> String {
    match winner {
        Winner::Faction(f) => f.to_string(),
        Winner::Draw => "Draw".to_string(),
    }
}

/// Run one game to completion: the agent fills each player phase, the
/// engine does the rest. The round cap inside the engine guarantees
/// termination; the safety limit only guards against an engine bug.
pub fn run_game(agent: &mut dyn Agent, seed: u64) -> Result<GameResult, String> {
    let mut game = Game::new(seed);
    let mut turns = 0u32;

    while game.winner().is_none() {
        agent.take_turn(&mut game);
        game.end_turn();
        turns += 1;
        if turns > MAX_ROUNDS + 1 {
            return Err(format!(
                "game with seed {seed} exceeded {MAX_ROUNDS} rounds without a result"
            ));
        }
    }

    Ok(build_result(&game, seed, agent.name()))
}

/// Run `games` seeds in parallel. The factory builds a fresh agent per
/// game so per-agent rng state never crosses threads.
pub fn run_batch(
    factory: &(dyn Fn(u64) -> Box<dyn Agent> + Sync),
    base_seed: u64,
    games: u32,
) -> Vec<Result<GameResult, String>> {
    (0..games)
        .into_par_iter()
        .map(|g| {
            let seed = base_seed + g as u64 * 1000;
            let mut agent = factory(seed);
            run_game(agent.as_mut(), seed)
        })
        .collect()
}

fn build_result(game: &Game, seed: u64, agent_name: &str) -> GameResult {
    let winner = game.winner().unwrap_or(Winner::Draw);
    let player_results = catalog::faction_ids()
        .map(|f| PlayerResult {
            faction: f,
            agent_name: if catalog::faction_def(f).scripted {
                "Scripted".to_string()
            } else {
                agent_name.to_string()
            },
            territory: game.territory_count(f),
            final_stock: *game.ledger(f),
        })
        .collect();

    GameResult { seed, winner, rounds_played: game.round().saturating_sub(1), player_results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexfront_agents::{IdleAgent, PolicyAgent, RandomAgent};

    #[test]
    fn test_run_game_completes() {
        let mut agent = IdleAgent::new(FactionId(0));
        let result = run_game(&mut agent, 42).expect("game should finish");
        assert_eq!(result.rounds_played, MAX_ROUNDS);
        assert_eq!(result.player_results.len(), 3);
    }

    #[test]
    fn test_run_game_deterministic() {
        let r1 = run_game(&mut PolicyAgent::new(FactionId(0), 7), 42).expect("game one");
        let r2 = run_game(&mut PolicyAgent::new(FactionId(0), 7), 42).expect("game two");
        assert_eq!(r1.winner, r2.winner);
        for (a, b) in r1.player_results.iter().zip(&r2.player_results) {
            assert_eq!(a.territory, b.territory);
            assert_eq!(a.final_stock, b.final_stock);
        }
    }

    #[test]
    fn test_random_agent_cannot_break_the_engine() {
        for seed in 0..4u64 {
            let mut agent = RandomAgent::new(FactionId(0), seed);
            run_game(&mut agent, seed * 31 + 1).expect("random play must stay legal");
        }
    }

    #[test]
    fn test_run_batch() {
        let factory = |_seed: u64| Box::new(IdleAgent::new(FactionId(0))) as Box<dyn Agent>;
        let results = run_batch(&factory, 100, 4);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
