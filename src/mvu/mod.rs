pub mod error;
pub mod round;
pub mod runtime;
