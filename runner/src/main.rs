// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing games and running tournaments
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use hexfront_agents::{Agent, IdleAgent, PolicyAgent, RandomAgent};
use hexfront_engine::catalog;
use hexfront_engine::FactionId;
use hexfront_tournament::runner::winner_label;
use hexfront_tournament::{run_batch, Database};

#[derive(Parser)]
#[command(name = "hexfront-runner", about = "Hexfront territory game lab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single game with an agent on the human seat
    Play {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Agent type: "idle", "random", or "policy"
        #[arg(short, long, default_value = "policy")]
        agent: String,
    },
    /// Run a tournament of N games
    Tournament {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value = "results.db")]
        db: String,
        /// Agent type: "idle", "random", or "policy"
        #[arg(short, long, default_value = "policy")]
        agent: String,
    },
    /// Show the leaderboard from a results database
    Leaderboard {
        #[arg(short, long, default_value = "results.db")]
        db: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, agent } => cmd_play(seed, &agent),
        Commands::Tournament { games, seed, db, agent } => cmd_tournament(games, seed, &db, &agent),
        Commands::Leaderboard { db } => cmd_leaderboard(&db),
    }
}

fn cmd_play(seed: u64, agent_type: &str) {
    println!("=== Hexfront ===\n");
    println!("Running single game: seed={seed}, agent={agent_type}\n");

    let mut agent = make_agent(agent_type, seed);
    match hexfront_tournament::run_game(agent.as_mut(), seed) {
        Ok(result) => {
            println!("Game finished!");
            println!("  Winner: {}", winner_label(result.winner));
            println!("  Rounds played: {}", result.rounds_played);
            println!();
            println!("  Final standings:");
            for pr in &result.player_results {
                let s = pr.final_stock;
                println!(
                    "    {:10} ({:8}) -- territory: {:3}, food: {}, ore: {}, wood: {}, gold: {}",
                    pr.faction.to_string(),
                    pr.agent_name,
                    pr.territory,
                    s.food,
                    s.ore,
                    s.wood,
                    s.gold,
                );
            }
        }
        Err(e) => eprintln!("Game error: {e}"),
    }
}

fn cmd_tournament(num_games: u32, base_seed: u64, db_path: &str, agent_type: &str) {
    println!("=== Tournament: {num_games} games, agent={agent_type} ===\n");

    let db = Database::new(db_path);
    let agent_name = agent_label(agent_type);
    let agent_id = db.register_agent(agent_name);

    let factory = |seed: u64| make_agent(agent_type, seed);
    let results = run_batch(&factory, base_seed, num_games);

    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut errors = 0u32;
    for result in &results {
        match result {
            Ok(r) => {
                db.store_game(r, agent_id);
                match r.winner {
                    hexfront_engine::Winner::Faction(FactionId(0)) => wins += 1,
                    hexfront_engine::Winner::Draw => draws += 1,
                    _ => {}
                }
            }
            Err(e) => {
                errors += 1;
                eprintln!("ERROR -- {e}");
            }
        }
    }

    let played = num_games - errors;
    let losses = played - wins - draws;
    println!("--- Summary ({played} games, {errors} errors) ---");
    let human = catalog::faction_def(FactionId(0)).name;
    println!("  {human} ({agent_name}): {wins} wins, {draws} draws, {losses} losses");
    if played > 0 {
        println!("  Win rate: {:.1}%", wins as f64 / played as f64 * 100.0);
    }
    println!("\nResults saved to: {db_path}");
    println!("Total games in DB: {}", db.game_count());
}

fn cmd_leaderboard(db_path: &str) {
    let db = Database::new(db_path);
    let board = db.leaderboard();
    if board.is_empty() {
        println!("No agents found. Run some tournaments first.");
        return;
    }
    println!("=== Leaderboard ===\n");
    println!("{:<20} {:>8} {:>8} {:>8} {:>10}", "Agent", "Games", "Wins", "Draws", "Win rate");
    println!("{}", "-".repeat(58));
    for (name, games, wins, draws, rate) in &board {
        println!(
            "{:<20} {:>8} {:>8} {:>8} {:>9.1}%",
            name,
            games,
            wins,
            draws,
            rate * 100.0
        );
    }
}

fn agent_label(agent_type: &str) -> &'static str {
    match agent_type {
        "idle" => "Idle",
        "random" => "Random",
        _ => "Policy",
    }
}

fn make_agent(agent_type: &str, seed: u64) -> Box<dyn Agent> {
    let seat = FactionId(0);
    match agent_type {
        "idle" => Box::new(IdleAgent::new(seat)),
        "random" => Box::new(RandomAgent::new(seat, seed)),
        _ => Box::new(PolicyAgent::new(seat, seed)),
    }
}
