use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive for the subscriber (e.g. "info", "debug")
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rotated log files
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Write logs to rolling files in addition to stderr
    #[serde(default = "default_file_enabled")]
    pub file_enabled: bool,

    /// Number of rotated log files to retain
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_dir() -> String {
    "logs".to_string()
}

fn default_file_enabled() -> bool {
    true
}

fn default_max_files() -> usize {
    7
}

impl LogConfig {
    pub fn from_env() -> Self {
        let debug = std::env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // DEBUG raises the default level; an explicit LOG_LEVEL still wins
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug {
                "debug".to_string()
            } else {
                default_level()
            }
        });

        Self {
            level,
            dir: std::env::var("LOG_DIR").unwrap_or_else(|_| default_dir()),
            file_enabled: std::env::var("LOG_FILE_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_file_enabled),
            max_files: std::env::var("LOG_MAX_FILES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_files),
        }
    }
}
