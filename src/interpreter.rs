//! Response Interpreter
//!
//! Turns the model's semi-structured reply into a verdict, a cleaned
//! analysis body, and a citation list.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Analysis, GroundingAttribution, Source, Verdict};

lazy_static! {
    static ref STATUS_LINE: Regex =
        Regex::new(r"(?i)STATUS:\s*\[(TRUE|FALSE|NEEDS REVIEW|UNVERIFIABLE)\]")
            .expect("status pattern is valid");
}

/// Interpret a grounded reply into a structured [`Analysis`]
pub fn interpret(text: &str, attributions: &[GroundingAttribution]) -> Analysis {
    Analysis {
        verdict: extract_verdict(text),
        body: extract_body(text),
        sources: extract_sources(attributions),
    }
}

/// Classify the reply by marker presence.
///
/// Plain substring scan over the whole text: TRUE sets the verdict, FALSE
/// overrides it when both appear. The scan is not anchored to the status
/// line, so a bare occurrence of either word in the prose counts too, and
/// NEEDS REVIEW never wins.
pub fn extract_verdict(text: &str) -> Verdict {
    let mut verdict = Verdict::Unverifiable;
    if text.contains("TRUE") {
        verdict = Verdict::True;
    }
    if text.contains("FALSE") {
        verdict = Verdict::False;
    }
    verdict
}

/// Strip the first status-marker occurrence and trim the remainder
pub fn extract_body(text: &str) -> String {
    STATUS_LINE.replace(text, "").trim().to_string()
}

/// Map attributions to sources, dropping entries that miss a uri or title
/// and collapsing duplicate uris to their first occurrence
pub fn extract_sources(attributions: &[GroundingAttribution]) -> Vec<Source> {
    let mut seen = HashSet::new();
    attributions
        .iter()
        .filter_map(|attribution| {
            let web = attribution.web.as_ref()?;
            let uri = web.uri.as_deref().filter(|uri| !uri.is_empty())?;
            let title = web.title.as_deref().filter(|title| !title.is_empty())?;
            Some(Source {
                uri: uri.to_string(),
                title: title.to_string(),
            })
        })
        .filter(|source| seen.insert(source.uri.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WebSource;

    fn attribution(uri: Option<&str>, title: Option<&str>) -> GroundingAttribution {
        GroundingAttribution {
            web: Some(WebSource {
                uri: uri.map(str::to_string),
                title: title.map(str::to_string),
            }),
        }
    }

    #[test]
    fn true_marker_alone_reads_true() {
        let text = "STATUS: [TRUE]\nThe evidence supports the claim.";
        assert_eq!(extract_verdict(text), Verdict::True);
    }

    #[test]
    fn false_takes_precedence_over_true() {
        let text = "STATUS: [TRUE]\nSome sources rate the opposite claim FALSE.";
        assert_eq!(extract_verdict(text), Verdict::False);
    }

    #[test]
    fn unmarked_text_falls_back_to_unverifiable() {
        assert_eq!(
            extract_verdict("STATUS: [UNVERIFIABLE]\nNo conclusive evidence."),
            Verdict::Unverifiable
        );
        assert_eq!(
            extract_verdict("STATUS: [NEEDS REVIEW]\nMinor inaccuracies."),
            Verdict::Unverifiable
        );
    }

    #[test]
    fn status_line_is_stripped_for_all_marker_variants() {
        for marker in ["TRUE", "FALSE", "NEEDS REVIEW", "UNVERIFIABLE"] {
            let text = format!("STATUS: [{}]\n## 1. Source Evaluation\nDetails.", marker);
            let body = extract_body(&text);
            assert!(!body.contains("STATUS:"), "marker {} survived", marker);
            assert!(body.starts_with("## 1."));
        }
    }

    #[test]
    fn stripping_is_case_insensitive_and_trims() {
        let body = extract_body("status: [true]\n\nAnalysis text.\n");
        assert_eq!(body, "Analysis text.");
    }

    #[test]
    fn body_without_marker_is_only_trimmed() {
        assert_eq!(extract_body("  bare analysis  "), "bare analysis");
    }

    #[test]
    fn incomplete_attributions_are_dropped() {
        let attributions = vec![
            attribution(Some("a"), Some("A")),
            GroundingAttribution {
                web: Some(WebSource {
                    uri: None,
                    title: None,
                }),
            },
            attribution(Some("b"), Some("B")),
        ];
        let sources = extract_sources(&attributions);
        assert_eq!(
            sources,
            vec![
                Source {
                    uri: "a".to_string(),
                    title: "A".to_string()
                },
                Source {
                    uri: "b".to_string(),
                    title: "B".to_string()
                },
            ]
        );
    }

    #[test]
    fn missing_web_block_and_empty_fields_are_dropped() {
        let attributions = vec![
            GroundingAttribution { web: None },
            attribution(Some(""), Some("Empty uri")),
            attribution(Some("https://example.org"), Some("")),
        ];
        assert!(extract_sources(&attributions).is_empty());
    }

    #[test]
    fn duplicate_uris_keep_first_occurrence() {
        let attributions = vec![
            attribution(Some("a"), Some("First")),
            attribution(Some("a"), Some("Second")),
            attribution(Some("b"), Some("Other")),
        ];
        let sources = extract_sources(&attributions);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "First");
        assert_eq!(sources[1].uri, "b");
    }

    #[test]
    fn interpret_combines_all_fields() {
        let analysis = interpret(
            "STATUS: [FALSE]\n## 1. Source Evaluation\nStrongly contradicted.",
            &[attribution(Some("https://example.org"), Some("Example"))],
        );
        assert_eq!(analysis.verdict, Verdict::False);
        assert!(analysis.body.starts_with("## 1."));
        assert_eq!(analysis.sources.len(), 1);
    }
}
