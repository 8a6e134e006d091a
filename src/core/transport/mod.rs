//! Transport layer for the server.
//!
//! This module provides the two transport bindings:
//! - **STDIO**: one domain server per process (default for MCP) - feature: `stdio`
//! - **HTTP**: JSON-RPC over POST, one route prefix per domain server - feature: `http`
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the domain server handlers.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "stdio")]
pub use config::StdioConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
