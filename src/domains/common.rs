//! Helpers shared across domain tool definitions.
//!
//! This module provides response shaping and the list-to-string transform
//! the upstream APIs expect for identifier lists.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Join identifiers into the comma-delimited form the upstream APIs accept.
///
/// The upstreams take delimited strings in these positions, not repeated
/// parameters or JSON arrays. A single element produces no delimiter.
pub fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_ids_multiple() {
        assert_eq!(join_ids(&ids(&["GO:1", "GO:2", "GO:3"])), "GO:1,GO:2,GO:3");
    }

    #[test]
    fn test_join_ids_single_has_no_delimiter() {
        assert_eq!(join_ids(&ids(&["GO:0006915"])), "GO:0006915");
    }

    #[test]
    fn test_join_ids_empty() {
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "boom");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_success_result_is_not_flagged() {
        let result = success_result("ok".to_string());
        assert!(!result.is_error.unwrap_or(false));
    }
}
