//! PubMed tool definitions, one file per tool.

pub mod full_text;
pub mod full_text_json;

pub use full_text::FullTextTool;
pub use full_text_json::FullTextJsonTool;
