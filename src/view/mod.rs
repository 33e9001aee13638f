pub mod export;
pub mod index;
pub mod leaderboard;
pub mod round;
pub mod scorecard;
