//! Command implementations.

pub mod create;
pub mod delete;
pub mod fight;
pub mod get;
pub mod health;
pub mod leaderboard;
pub mod record;

pub use self::create::execute_create;
pub use self::delete::execute_delete;
pub use self::fight::{execute_fight, run_bout};
pub use self::get::execute_get;
pub use self::health::execute_health;
pub use self::leaderboard::execute_leaderboard;
pub use self::record::execute_record;
