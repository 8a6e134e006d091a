//! Domain servers, one per upstream bioinformatics API.
//!
//! Each subdomain owns the tool definitions, registry and router for one
//! upstream service. Domains share no mutable state; building a domain's
//! tool table is pure construction and safe to repeat.

pub mod common;
pub mod plasmodb;
pub mod pubmed;
pub mod quickgo;

use serde::{Deserialize, Serialize};

/// Identifies one of the hosted domain servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainId {
    Pubmed,
    Plasmodb,
    Quickgo,
}

impl DomainId {
    /// All hosted domains, in registration order.
    pub const ALL: [DomainId; 3] = [DomainId::Pubmed, DomainId::Plasmodb, DomainId::Quickgo];

    /// The identity name reported to MCP clients.
    pub fn name(self) -> &'static str {
        match self {
            DomainId::Pubmed => "pubmed",
            DomainId::Plasmodb => "plasmodb",
            DomainId::Quickgo => "quickgo",
        }
    }

    /// The route prefix served by the multiplexed HTTP transport.
    pub fn route(self) -> &'static str {
        match self {
            DomainId::Pubmed => "/pubmed",
            DomainId::Plasmodb => "/plasmodb",
            DomainId::Quickgo => "/quickgo",
        }
    }

    /// Short usage note reported through the MCP instructions field.
    pub fn instructions(self) -> &'static str {
        match self {
            DomainId::Pubmed => {
                "Retrieves full-text PubMed Central articles through the NCBI BioNLP BioC service."
            }
            DomainId::Plasmodb => "Searches PlasmoDB gene records by free text.",
            DomainId::Quickgo => {
                "Queries the QuickGO gene ontology service for terms, slims and sub-graphs."
            }
        }
    }
}

impl std::str::FromStr for DomainId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pubmed" => Ok(DomainId::Pubmed),
            "plasmodb" => Ok(DomainId::Plasmodb),
            "quickgo" => Ok(DomainId::Quickgo),
            other => Err(format!("Unknown domain: {}", other)),
        }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for domain in DomainId::ALL {
            assert_eq!(domain.name().parse::<DomainId>().unwrap(), domain);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("QuickGO".parse::<DomainId>().unwrap(), DomainId::Quickgo);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("uniprot".parse::<DomainId>().is_err());
    }

    #[test]
    fn test_route_prefixes() {
        assert_eq!(DomainId::Pubmed.route(), "/pubmed");
        assert_eq!(DomainId::Plasmodb.route(), "/plasmodb");
        assert_eq!(DomainId::Quickgo.route(), "/quickgo");
    }
}
