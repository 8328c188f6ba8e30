pub mod database;
pub mod runner;

pub use database::Database;
pub use runner::{run_batch, run_game, GameResult, PlayerResult};
