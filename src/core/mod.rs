//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! configuration, the per-domain MCP handler, the upstream HTTP gateway and
//! the transport layer.

pub mod config;
pub mod server;
pub mod transport;
pub mod upstream;

pub use config::Config;
pub use server::DomainServer;
pub use transport::{TransportConfig, TransportService};
pub use upstream::{UpstreamGateway, UpstreamMethod, UpstreamRequest};
