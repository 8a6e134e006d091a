//! Bioinformatics MCP Server Library
//!
//! This crate exposes three third-party bioinformatics REST APIs as MCP
//! (Model Context Protocol) tool servers behind a single binary.
//!
//! # Architecture
//!
//! - **core**: Shared infrastructure - configuration, the per-domain MCP
//!   handler, the upstream HTTP gateway and the transport layer
//! - **domains**: One module per upstream API, each owning its tool
//!   definitions, registry and router
//!   - **pubmed**: NCBI BioNLP full-text retrieval (BioC JSON and Markdown)
//!   - **plasmodb**: PlasmoDB free-text gene search
//!   - **quickgo**: QuickGO ontology terms, slims and sub-graphs
//!
//! # Example
//!
//! ```rust,no_run
//! use bio_mcp_server::core::{Config, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     TransportService::new(config.transport).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, DomainServer, TransportService, UpstreamGateway};
pub use crate::domains::DomainId;
