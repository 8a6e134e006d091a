//! PlasmoDB genomics domain.
//!
//! Wraps the VEuPathDB WDK REST service for PlasmoDB, the Plasmodium
//! genomics database.

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;

/// Base URL of the PlasmoDB WDK service.
pub const BASE_URL: &str = "https://plasmodb.org/plasmo/service";
