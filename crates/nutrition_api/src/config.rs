//! Request-layer configuration.
//!
//! Values come from environment variables; blank values count as unset.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `NUTRITION_UPLOAD_DIR` | attachment directory | `uploads` under the working directory |
//! | `NUTRITION_ENV` | `development` enables debug routes | production |
//! | `NUTRITION_LOG_LEVEL` | one of trace, debug, info, warn, error | build-mode default |
//! | `NUTRITION_LOG_DIR` | absolute log directory | logging off |

use nutrition_core::default_log_level;
use std::path::PathBuf;

pub const UPLOAD_DIR_VAR: &str = "NUTRITION_UPLOAD_DIR";
pub const ENV_VAR: &str = "NUTRITION_ENV";
pub const LOG_LEVEL_VAR: &str = "NUTRITION_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "NUTRITION_LOG_DIR";

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEVELOPMENT_ENV: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Where contact-form attachments are written.
    pub upload_dir: PathBuf,
    /// Exposes `/api/debug/*` listing routes.
    pub debug_routes: bool,
    pub log_level: String,
    /// `None` keeps file logging off.
    pub log_dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let upload_dir = read(UPLOAD_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_upload_dir);

        let debug_routes = match read(ENV_VAR) {
            Some(env) => env.eq_ignore_ascii_case(DEVELOPMENT_ENV),
            None => false,
        };

        let log_level = read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string());

        let log_dir = read(LOG_DIR_VAR).map(PathBuf::from);

        Self {
            upload_dir,
            debug_routes,
            log_level,
            log_dir,
        }
    }

    /// Key=value summary for the startup log line.
    pub fn summary(&self) -> String {
        format!(
            "upload_dir={} debug_routes={} log_level={} file_logging={}",
            self.upload_dir.display(),
            self.debug_routes,
            self.log_level,
            self.log_dir.is_some()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            debug_routes: false,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

fn default_upload_dir() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(DEFAULT_UPLOAD_DIR))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR))
}
