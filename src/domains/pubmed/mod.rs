//! PubMed full-text domain.
//!
//! Wraps the NCBI BioNLP PMC Open Access BioC service, which serves
//! full-text articles as BioC JSON.

pub mod bioc;
pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;

/// Base URL of the NCBI BioNLP PMC Open Access service.
pub const BASE_URL: &str = "https://www.ncbi.nlm.nih.gov/research/bionlp/RESTful/pmcoa.cgi";
