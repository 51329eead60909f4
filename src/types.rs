//! Core Types
//!
//! Verdict classification, the structured fact-check result, and the typed
//! wire mirror of the generateContent response.

use serde::{Deserialize, Serialize};

/// Classification assigned to a checked claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    False,
    NeedsReview,
    Unverifiable,
}

impl Verdict {
    /// Marker token as it appears in the model's status line
    pub fn marker(&self) -> &'static str {
        match self {
            Verdict::True => "TRUE",
            Verdict::False => "FALSE",
            Verdict::NeedsReview => "NEEDS REVIEW",
            Verdict::Unverifiable => "UNVERIFIABLE",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// A single cited source returned alongside a grounded response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// Structured result of one fact-check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub verdict: Verdict,
    /// Analysis text with the status-marker line stripped
    pub body: String,
    /// Cited sources in attribution order, deduplicated by uri
    pub sources: Vec<Source>,
}

// Wire shape of the generateContent response. Every nesting level is
// optional; unknown fields are ignored.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_attributions: Vec<GroundingAttribution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundingAttribution {
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl GenerateResponse {
    /// Text body of the first candidate, if the response carries one
    pub fn primary_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Grounding attributions of the first candidate; empty when absent
    pub fn attributions(&self) -> &[GroundingAttribution] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_attributions.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_text_reads_first_candidate() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "STATUS: [TRUE]\nbody" }] } }]
        }))
        .unwrap();
        assert_eq!(response.primary_text(), Some("STATUS: [TRUE]\nbody"));
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }))
        .unwrap();
        assert_eq!(response.primary_text(), None);
    }

    #[test]
    fn missing_candidates_and_metadata_are_tolerated() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.primary_text(), None);
        assert!(response.attributions().is_empty());
    }

    #[test]
    fn error_body_deserializes() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        }))
        .unwrap();
        assert_eq!(
            response.error.and_then(|e| e.message).as_deref(),
            Some("API key not valid.")
        );
    }
}
