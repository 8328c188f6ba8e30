// ═══════════════════════════════════════════════════════════════════════
// Database — SQLite storage for game results and the leaderboard
// ═══════════════════════════════════════════════════════════════════════

use rusqlite::{params, Connection};

use crate::runner::{winner_label, GameResult};
use hexfront_engine::{FactionId, Winner};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path.
    pub fn new(path: &str) -> Self {
        let conn = Connection::open(path).expect("Failed to open database");
        let db = Database { conn };
        db.create_schema();
        db
    }

    /// In-memory database (useful for tests).
    pub fn in_memory() -> Self {
        let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
        let db = Database { conn };
        db.create_schema();
        db
    }

    fn create_schema(&self) {
        self.conn
            .execute_batch(
                "
            CREATE TABLE IF NOT EXISTS agents (
                id          INTEGER PRIMARY KEY,
                name        TEXT NOT NULL UNIQUE,
                games       INTEGER NOT NULL DEFAULT 0,
                wins        INTEGER NOT NULL DEFAULT 0,
                draws       INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS games (
                id          INTEGER PRIMARY KEY,
                seed        INTEGER NOT NULL,
                rounds      INTEGER NOT NULL,
                winner      TEXT NOT NULL,
                played_at   TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE TABLE IF NOT EXISTS game_players (
                id          INTEGER PRIMARY KEY,
                game_id     INTEGER NOT NULL REFERENCES games(id),
                agent_id    INTEGER NOT NULL,
                faction     TEXT NOT NULL,
                territory   INTEGER NOT NULL,
                food        INTEGER NOT NULL,
                ore         INTEGER NOT NULL,
                wood        INTEGER NOT NULL,
                gold        INTEGER NOT NULL
            );
        ",
            )
            .expect("Failed to create schema");
    }

    /// Register an agent (or return the existing id).
    pub fn register_agent(&self, name: &str) -> i64 {
        self.conn
            .execute("INSERT OR IGNORE INTO agents (name) VALUES (?1)", params![name])
            .expect("Failed to register agent");
        self.conn
            .query_row("SELECT id FROM agents WHERE name = ?1", params![name], |row| row.get(0))
            .expect("Failed to get agent id")
    }

    /// Store a completed game. The agent occupies the human seat
    /// (faction 0); scripted factions are recorded with agent_id 0.
    pub fn store_game(&self, result: &GameResult, agent_id: i64) -> i64 {
        self.conn
            .execute(
                "INSERT INTO games (seed, rounds, winner) VALUES (?1, ?2, ?3)",
                params![result.seed as i64, result.rounds_played as i64, winner_label(result.winner)],
            )
            .expect("Failed to store game");
        let game_id = self.conn.last_insert_rowid();

        for pr in &result.player_results {
            let row_agent = if pr.faction == FactionId(0) { agent_id } else { 0 };
            self.conn
                .execute(
                    "INSERT INTO game_players (game_id, agent_id, faction, territory, food, ore, wood, gold)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        game_id,
                        row_agent,
                        pr.faction.to_string(),
                        pr.territory as i64,
                        pr.final_stock.food as i64,
                        pr.final_stock.ore as i64,
                        pr.final_stock.wood as i64,
                        pr.final_stock.gold as i64,
                    ],
                )
                .expect("Failed to store game player");
        }

        let won = result.winner == Winner::Faction(FactionId(0));
        let drew = result.winner == Winner::Draw;
        self.conn
            .execute(
                "UPDATE agents SET games = games + 1, wins = wins + ?1, draws = draws + ?2
                 WHERE id = ?3",
                params![i64::from(won), i64::from(drew), agent_id],
            )
            .expect("Failed to update agent stats");

        game_id
    }

    /// Win-rate leaderboard: (name, games, wins, draws, win rate).
    pub fn leaderboard(&self) -> Vec<(String, u32, u32, u32, f64)> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name, games, wins, draws,
                        CASE WHEN games > 0 THEN CAST(wins AS REAL) / games ELSE 0.0 END AS rate
                 FROM agents ORDER BY rate DESC, games DESC",
            )
            .expect("Failed to prepare leaderboard query");

        stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })
        .expect("Failed to query leaderboard")
        .filter_map(|r| r.ok())
        .collect()
    }

    /// Total number of games stored.
    pub fn game_count(&self) -> u32 {
        self.conn
            .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
            .unwrap_or(0)
    }
}
