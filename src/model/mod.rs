pub mod course;
pub mod round;
pub mod scorecard;
pub mod types;

pub use course::*;
pub use round::*;
pub use scorecard::*;
pub use types::*;
