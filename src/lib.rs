pub mod args;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvu;
pub mod score;
pub mod view;
pub mod controller {
    pub mod round;
}

pub use error::ScorecardError;
pub use model::{Hole, RoundState, Scorecard, Slot};
pub use score::{LeaderboardEntry, leaderboard, total};
