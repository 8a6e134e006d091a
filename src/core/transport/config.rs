//! Transport configuration types.

use serde::{Deserialize, Serialize};

#[cfg(feature = "stdio")]
use crate::domains::DomainId;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport serving a single domain.
    #[cfg(feature = "stdio")]
    Stdio(StdioConfig),

    /// HTTP transport multiplexing every domain behind path prefixes.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// STDIO transport configuration.
#[cfg(feature = "stdio")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdioConfig {
    /// Domain served by this process.
    #[serde(default = "default_domain")]
    pub domain: DomainId,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "stdio")]
fn default_domain() -> DomainId {
    DomainId::Pubmed
}

#[cfg(feature = "http")]
fn default_port() -> u16 {
    8000
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio(StdioConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "stdio")]
impl Default for StdioConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config for one domain.
    #[cfg(feature = "stdio")]
    pub fn stdio(domain: DomainId) -> Self {
        Self::Stdio(StdioConfig { domain })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` selects the transport; the HTTP port comes from
    /// `PORT` (default 8000) and the STDIO domain from `MCP_DOMAIN`
    /// (default pubmed).
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            #[cfg(feature = "stdio")]
            _ => Self::Stdio(StdioConfig::from_env()),
            #[cfg(all(not(feature = "stdio"), feature = "http"))]
            _ => Self::Http(HttpConfig::from_env()),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio(cfg) => format!("STDIO serving domain '{}'", cfg.domain),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "HTTP on {}:{} multiplexing /pubmed, /plasmodb, /quickgo",
                cfg.host, cfg.port
            ),
        }
    }
}

#[cfg(feature = "stdio")]
impl StdioConfig {
    /// Load the served domain from `MCP_DOMAIN`.
    pub fn from_env() -> Self {
        let domain = std::env::var("MCP_DOMAIN")
            .ok()
            .and_then(|value| match value.parse() {
                Ok(domain) => Some(domain),
                Err(e) => {
                    tracing::warn!("{}; falling back to default domain", e);
                    None
                }
            })
            .unwrap_or_else(default_domain);
        Self { domain }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Load the listen address from `PORT` and `MCP_HTTP_HOST`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);
        Self {
            port,
            host,
            enable_cors,
        }
    }
}
