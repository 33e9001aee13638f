use super::types::{Args, CleanArgs};
use crate::model::CourseCatalog;

/// Ten years. Longer lifetimes would push the idle cutoff past what the
/// clock arithmetic can represent.
pub const MAX_SESSION_AGE_MINUTES: i64 = 60 * 24 * 365 * 10;

/// Upper bound on live rounds; the least recently touched one is dropped
/// when a new session would exceed it.
pub const MAX_SESSIONS_LIMIT: usize = 100_000;

impl Args {
    /// Turn parsed flags into the settings the server runs with.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the course catalog cannot be decoded, the
    /// session lifetime is not between one minute and ten years, or the
    /// session cap is zero or unreasonably large
    pub fn validate(self) -> Result<CleanArgs, String> {
        let session_max_age = match self.session_max_age_minutes {
            m if m <= 0 => {
                return Err("session max age must be a positive number of minutes".to_string());
            }
            m if m > MAX_SESSION_AGE_MINUTES => {
                return Err(format!(
                    "session max age must be at most {MAX_SESSION_AGE_MINUTES} minutes"
                ));
            }
            m => chrono::TimeDelta::try_minutes(m)
                .ok_or_else(|| format!("session max age of {m} minutes is out of range"))?,
        };
        if self.max_sessions == 0 || self.max_sessions > MAX_SESSIONS_LIMIT {
            return Err(format!(
                "max sessions must be between 1 and {MAX_SESSIONS_LIMIT}"
            ));
        }
        let catalog = match self.courses_json {
            Some(json) => serde_json::from_value::<Vec<crate::model::Course>>(json)
                .map(|courses| CourseCatalog { courses })
                .map_err(|e| format!("The course catalog could not be decoded: {e}"))?,
            None => CourseCatalog::default(),
        };
        Ok(CleanArgs {
            host: self.host,
            port: self.port,
            catalog,
            session_max_age,
            max_sessions: self.max_sessions,
            static_dir: self.static_dir,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}
