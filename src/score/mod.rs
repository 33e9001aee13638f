pub mod leaderboard;
pub mod table;
pub mod totals;

pub use leaderboard::*;
pub use table::*;
pub use totals::*;
