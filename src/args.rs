use clap::Parser;

pub mod config;
pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the command line does not describe a usable setup
pub fn args_checks() -> Result<CleanArgs, String> {
    Args::parse().validate()
}
