//! Transport service - orchestrates the configured transport.
//!
//! This service provides a unified interface for starting the server with
//! either transport binding.

use tracing::info;

use super::{TransportConfig, TransportResult};

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

#[cfg(feature = "stdio")]
use crate::core::DomainServer;

/// Transport service - manages the transport layer.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the configured transport.
    ///
    /// The STDIO binding serves the single configured domain; the HTTP
    /// binding builds one server per route prefix. This method blocks until
    /// the transport shuts down.
    pub async fn run(self) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio(cfg) => {
                StdioTransport::run(DomainServer::new(cfg.domain)).await
            }
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run().await,
        }
    }
}
