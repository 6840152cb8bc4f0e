use log::warn;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_EVENT_DIR: &str = "/tmp";

/// Listener and sink settings, sourced from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub event_dir: PathBuf,
}

impl Config {
    /// Reads `GATEKEEPER_HOST`, `GATEKEEPER_PORT` and `GATEKEEPER_EVENT_DIR`,
    /// falling back to defaults. A malformed port is reported and ignored so
    /// startup never fails on configuration alone.
    pub fn from_env() -> Self {
        let host =
            std::env::var("GATEKEEPER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("GATEKEEPER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("ignoring unparseable GATEKEEPER_PORT {:?}", raw);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let event_dir = std::env::var("GATEKEEPER_EVENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EVENT_DIR));

        Config {
            host,
            port,
            event_dir,
        }
    }
}
