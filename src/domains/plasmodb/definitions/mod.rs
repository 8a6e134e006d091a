//! PlasmoDB tool definitions.

pub mod gene_search;

pub use gene_search::GeneSearchTool;
