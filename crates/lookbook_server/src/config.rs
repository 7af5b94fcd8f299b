//! Server configuration.

use derive_getters::Getters;
use tracing::warn;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Socket address to bind.
    #[builder(default = "default_addr()")]
    addr: String,
    /// Soft per-request deadline in seconds. Unset means unlimited.
    #[builder(default)]
    deadline_secs: Option<u64>,
}

fn default_addr() -> String {
    "0.0.0.0:3001".to_string()
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `LOOKBOOK_ADDR` (default: "0.0.0.0:3001")
    /// - `LOOKBOOK_DEADLINE_SECS` (optional; unparsable values are ignored)
    pub fn from_env() -> Self {
        let addr = std::env::var("LOOKBOOK_ADDR").unwrap_or_else(|_| default_addr());
        let deadline_secs = match std::env::var("LOOKBOOK_DEADLINE_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    warn!(value = %raw, "Ignoring unparsable LOOKBOOK_DEADLINE_SECS");
                    None
                }
            },
            Err(_) => None,
        };

        ServerConfigBuilder::default()
            .addr(addr)
            .deadline_secs(deadline_secs)
            .build()
            .expect("Valid ServerConfig")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfigBuilder::default()
            .build()
            .expect("Valid ServerConfig")
    }
}
