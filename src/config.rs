use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_PATH: &str = ".freelancehub/session.json";

/// Where session state is persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionBackendKind {
    /// In-process only; gone when the process exits.
    Memory,
    /// JSON file on disk.
    File(PathBuf),
    /// Shared Redis instance, keys namespaced under `prefix`.
    Redis { url: String, prefix: String },
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub session_backend: SessionBackendKind,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            session_backend: SessionBackendKind::File(PathBuf::from(DEFAULT_SESSION_PATH)),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the environment (after `.env` is loaded).
    ///
    /// `SESSION_BACKEND` selects `memory`, `file` (default) or `redis`; the
    /// redis backend requires `REDIS_URL`, and falls back to the file backend
    /// with a warning when it is unset.
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let request_timeout = parse_duration_secs("API_TIMEOUT_SECS", 30);

        let session_path = std::env::var("SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_PATH));

        let session_backend = match std::env::var("SESSION_BACKEND")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => SessionBackendKind::Memory,
            "redis" => match std::env::var("REDIS_URL") {
                Ok(url) => SessionBackendKind::Redis {
                    url,
                    prefix: std::env::var("SESSION_PREFIX")
                        .unwrap_or_else(|_| "freelancehub:session".to_string()),
                },
                Err(_) => {
                    tracing::warn!("SESSION_BACKEND=redis but REDIS_URL is not set; using file");
                    SessionBackendKind::File(session_path)
                }
            },
            _ => SessionBackendKind::File(session_path),
        };

        Self {
            api_base_url,
            request_timeout,
            session_backend,
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}
