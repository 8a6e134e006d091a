//! Minimal model of the BioC JSON format and its Markdown rendering.
//!
//! The BioNLP service returns an array of BioC collections; each collection
//! holds documents made of passages. Only the fields needed for rendering
//! are modeled, everything else in the payload is ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// A BioC collection: the top-level unit of the service response.
#[derive(Debug, Clone, Deserialize)]
pub struct BiocCollection {
    #[serde(default)]
    pub documents: Vec<BiocDocument>,
}

/// One article within a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct BiocDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub passages: Vec<BiocPassage>,
}

/// One passage of an article: a title, a paragraph, a caption, a reference.
#[derive(Debug, Clone, Deserialize)]
pub struct BiocPassage {
    #[serde(default)]
    pub infons: HashMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl BiocPassage {
    fn infon(&self, key: &str) -> Option<&str> {
        self.infons.get(key).map(String::as_str)
    }
}

/// Render a BioC document as Markdown.
///
/// Rendering is deterministic: the article title becomes a level-one
/// heading, section titles become level-two headings, reference passages
/// become list items and every other passage with text is emitted as a
/// paragraph. Passages without text are skipped.
pub fn convert_to_markdown(document: &BiocDocument) -> String {
    let mut blocks = Vec::new();

    for passage in &document.passages {
        let Some(text) = passage
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        else {
            continue;
        };

        let section_type = passage.infon("section_type").unwrap_or("").to_ascii_uppercase();
        let passage_type = passage.infon("type").unwrap_or("").to_ascii_lowercase();

        let block = if section_type == "TITLE" || passage_type == "front" {
            format!("# {}", text)
        } else if passage_type.contains("title") {
            format!("## {}", text)
        } else if passage_type == "ref" {
            format!("- {}", text)
        } else {
            text.to_string()
        };

        blocks.push(block);
    }

    blocks.join("\n\n")
}

/// Parse a raw service response and render its first document.
pub fn first_document_markdown(body: &str) -> Result<String, String> {
    let collections: Vec<BiocCollection> =
        serde_json::from_str(body).map_err(|e| format!("Unexpected BioC payload: {}", e))?;

    let document = collections
        .first()
        .and_then(|collection| collection.documents.first())
        .ok_or_else(|| "BioC payload contains no documents".to_string())?;

    Ok(convert_to_markdown(document))
}

/// A trimmed-down service response with one document, shared by the pubmed
/// tool tests.
#[cfg(test)]
pub(crate) const SAMPLE_RESPONSE: &str = r#"[
      {
        "documents": [
          {
            "id": "4304705",
            "passages": [
              {
                "infons": {"section_type": "TITLE", "type": "front"},
                "text": "Apoptosis in Plasmodium falciparum"
              },
              {
                "infons": {"section_type": "ABSTRACT", "type": "abstract_title_1"},
                "text": "Abstract"
              },
              {
                "infons": {"section_type": "ABSTRACT", "type": "abstract"},
                "text": "Programmed cell death has been described in unicellular parasites."
              },
              {
                "infons": {"section_type": "INTRO", "type": "paragraph"},
                "text": "Malaria remains a major cause of mortality."
              },
              {
                "infons": {"section_type": "REF", "type": "ref"},
                "text": "Smith J. Cell death pathways. 2010."
              },
              {
                "infons": {"section_type": "INTRO", "type": "paragraph"},
                "text": ""
              }
            ]
          }
        ]
      }
    ]"#;

/// The Markdown rendering of [`SAMPLE_RESPONSE`].
#[cfg(test)]
pub(crate) const SAMPLE_MARKDOWN: &str = "# Apoptosis in Plasmodium falciparum\n\n\
## Abstract\n\n\
Programmed cell death has been described in unicellular parasites.\n\n\
Malaria remains a major cause of mortality.\n\n\
- Smith J. Cell death pathways. 2010.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_renders_to_golden_markdown() {
        assert_eq!(
            first_document_markdown(SAMPLE_RESPONSE).unwrap(),
            SAMPLE_MARKDOWN
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = first_document_markdown(SAMPLE_RESPONSE).unwrap();
        let second = first_document_markdown(SAMPLE_RESPONSE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let err = first_document_markdown("[]").unwrap_err();
        assert!(err.contains("no documents"));
    }

    #[test]
    fn test_unparsable_payload_is_an_error() {
        let err = first_document_markdown("<html>Service Unavailable</html>").unwrap_err();
        assert!(err.contains("Unexpected BioC payload"));
    }

    #[test]
    fn test_document_id_survives_parsing() {
        let collections: Vec<BiocCollection> = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert_eq!(collections[0].documents[0].id.as_deref(), Some("4304705"));
    }
}
