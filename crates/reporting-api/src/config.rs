use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix to mount the routes under; empty means the root
    #[serde(default)]
    pub api_prefix: String,

    /// Enable CORS
    #[serde(default = "default_cors")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> bool {
    true
}

/// A non-empty prefix must start with a slash for router nesting; a bare
/// slash means the root and is treated as no prefix
fn normalize_prefix(prefix: String) -> String {
    if prefix.is_empty() || prefix == "/" {
        String::new()
    } else if prefix.starts_with('/') {
        prefix
    } else {
        format!("/{prefix}")
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_port),
            api_prefix: normalize_prefix(std::env::var("API_PREFIX").unwrap_or_default()),
            cors_enabled: std::env::var("API_CORS_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_cors),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
