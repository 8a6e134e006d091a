//! QuickGO ontology domain.
//!
//! Wraps the EBI QuickGO REST service for gene ontology terms, slims and
//! sub-graphs.

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;

/// Base URL of the QuickGO service.
pub const BASE_URL: &str = "https://www.ebi.ac.uk/QuickGO/services";
