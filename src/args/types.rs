use clap::Parser;
use serde_json::Value;

use crate::model::CourseCatalog;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Course list with optional pars, shown in the course picker. Display only.
    #[arg(
        long,
        value_name = "COURSES_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub courses_json: Option<Value>,
    /// Rounds untouched for this long are dropped.
    #[arg(long, value_name = "MINUTES", default_value = "720")]
    pub session_max_age_minutes: i64,
    /// Most rounds kept in memory at once.
    #[arg(long, value_name = "COUNT", default_value = "1000")]
    pub max_sessions: usize,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
    /// Repeat for more output: -v info, -vv debug, -vvv trace.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub catalog: CourseCatalog,
    pub session_max_age: chrono::Duration,
    pub max_sessions: usize,
    pub static_dir: String,
    pub verbose: u8,
    pub quiet: bool,
}
