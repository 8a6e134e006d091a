//! Defaults and validation shared by the QuickGO tools.

use crate::core::upstream::UpstreamRequest;
use crate::domains::common::join_ids;

/// Default number of results per page on the search endpoint.
pub fn default_limit() -> u32 {
    25
}

/// Default results page.
pub fn default_page() -> u32 {
    1
}

/// Reject an identifier list that would leave its position empty.
pub fn require_ids(name: &str, ids: &[String]) -> Result<(), String> {
    if ids.is_empty() {
        Err(format!("Parameter '{}' requires at least one term ID", name))
    } else {
        Ok(())
    }
}

/// Build the GET request for one member of the terms family.
///
/// The joined identifier list is embedded in the URL path, not passed as a
/// query parameter.
pub fn terms_request(ids: &[String], suffix: &str) -> UpstreamRequest {
    UpstreamRequest::get(format!("/ontology/go/terms/{}{}", join_ids(ids), suffix))
}
