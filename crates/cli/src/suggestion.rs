//! Turning free-text model output into a call that can be shown to a player.
//!
//! Models are asked for `{"bid": "...", "explanation": "..."}` but tend to
//! wrap it in prose or code fences. Nothing from the raw text reaches the
//! auction until it has been parsed into a [`Call`] and checked against the
//! auction it is meant for.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use slam_core::{legality, Auction, AuctionResult, Call, ParseCallError, Seat};

static BID_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""bid"\s*:\s*"([^"]*)""#).unwrap());
static EXPLANATION_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:explanation|rationale|reasoning)"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap()
});

/// A call read out of a model response, not yet checked for legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub call: Call,
    pub explanation: String,
}

#[derive(Deserialize)]
struct RawSuggestion {
    bid: String,
    #[serde(default, alias = "rationale", alias = "reasoning")]
    explanation: String,
}

/// The auction a suggestion is requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub dealer: Seat,
    #[serde(default)]
    pub calls: Vec<Call>,
}

impl SuggestionRequest {
    pub fn auction(&self) -> AuctionResult<Auction> {
        Auction::replay(self.dealer, self.calls.iter().copied())
    }
}

/// What goes back to the UI. `fallback` is set when the model's answer was
/// discarded and `bid` is the default Pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub bid: Call,
    pub explanation: String,
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SuggestionResponse {
    fn accepted(suggestion: Suggestion) -> Self {
        Self {
            bid: suggestion.call,
            explanation: suggestion.explanation,
            fallback: false,
            note: None,
        }
    }

    fn pass_instead(note: String) -> Self {
        warn!("suggestion discarded: {}", note);
        Self {
            bid: Call::Pass,
            explanation: "Unable to use the suggested call; defaulting to Pass.".to_string(),
            fallback: true,
            note: Some(note),
        }
    }
}

/// Reads the suggested call out of raw model text.
///
/// Takes the span from the first `{` to the last `}` and decodes it as
/// JSON. If that fails, the `"bid"` field is pulled out with a pattern match
/// so a truncated or sloppy object can still be used.
pub fn parse_suggested_call(raw: &str) -> Result<Suggestion, ParseCallError> {
    let text = raw.replace("```json", "").replace("```", "");

    if let Some(object) = outer_object(&text) {
        if let Ok(parsed) = serde_json::from_str::<RawSuggestion>(object) {
            return Ok(Suggestion {
                call: parsed.bid.parse()?,
                explanation: parsed.explanation.trim().to_string(),
            });
        }
    }

    let bid = BID_FIELD
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ParseCallError::Unrecognized(excerpt(raw)))?;
    let explanation = EXPLANATION_FIELD
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape(m.as_str()))
        .unwrap_or_default();
    Ok(Suggestion {
        call: bid.as_str().parse()?,
        explanation,
    })
}

/// Parses a model response and checks it against `auction`. Anything that
/// can't be played as the next call becomes Pass with a note saying why.
pub fn vet_suggestion(auction: &Auction, raw: &str) -> SuggestionResponse {
    let suggestion = match parse_suggested_call(raw) {
        Ok(suggestion) => suggestion,
        Err(e) => return SuggestionResponse::pass_instead(format!("unreadable suggestion: {e}")),
    };
    match legality::check(suggestion.call, auction) {
        Ok(()) => SuggestionResponse::accepted(suggestion),
        Err(reason) => SuggestionResponse::pass_instead(format!(
            "suggested {} is illegal: {}",
            suggestion.call, reason
        )),
    }
}

fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn unescape(fragment: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{fragment}\"")).unwrap_or_else(|_| fragment.to_string())
}

fn excerpt(raw: &str) -> String {
    const LIMIT: usize = 40;
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(calls: &str) -> Auction {
        Auction::from_text(Seat::North, calls).unwrap()
    }

    #[test]
    fn test_parse_plain_json() {
        let s = parse_suggested_call(r#"{"bid": "2C", "explanation": "Stayman"}"#).unwrap();
        assert_eq!(s.call, "2C".parse().unwrap());
        assert_eq!(s.explanation, "Stayman");
    }

    #[test]
    fn test_parse_json_in_prose_and_fences() {
        let raw = "Sure! Here is my answer:\n```json\n{\n  \"bid\": \"2♥\",\n  \"reasoning\": \"Transfer to spades.\"\n}\n```\nGood luck.";
        let s = parse_suggested_call(raw).unwrap();
        assert_eq!(s.call, "2H".parse().unwrap());
        assert_eq!(s.explanation, "Transfer to spades.");
    }

    #[test]
    fn test_parse_rationale_alias_and_missing_explanation() {
        let s = parse_suggested_call(r#"{"bid":"pass","rationale":"weak"}"#).unwrap();
        assert_eq!(s.call, Call::Pass);
        assert_eq!(s.explanation, "weak");

        let s = parse_suggested_call(r#"{"bid":"3nt"}"#).unwrap();
        assert_eq!(s.call.to_string(), "3NT");
        assert!(s.explanation.is_empty());
    }

    #[test]
    fn test_parse_falls_back_to_field_match() {
        // Trailing comma and a stray brace in the prose break the JSON.
        let raw = r#"{"bid": "4S", "explanation": "Game with a \"fit\"",} then }"#;
        let s = parse_suggested_call(raw).unwrap();
        assert_eq!(s.call.to_string(), "4S");
        assert_eq!(s.explanation, "Game with a \"fit\"");

        // Truncated output with no closing brace.
        let s = parse_suggested_call(r#"{"bid": "X", "explanation": "pena"#).unwrap();
        assert_eq!(s.call, Call::Double);
        assert!(s.explanation.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_or_bad_bid() {
        assert!(matches!(
            parse_suggested_call("I would bid two clubs here."),
            Err(ParseCallError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_suggested_call(r#"{"bid": "8NT"}"#),
            Err(ParseCallError::BadLevel(_))
        ));
        assert!(parse_suggested_call("").is_err());
    }

    #[test]
    fn test_vet_accepts_legal_call() {
        let response = vet_suggestion(
            &auction("1NT P"),
            r#"{"bid": "2C", "explanation": "Stayman for the majors"}"#,
        );
        assert_eq!(
            response,
            SuggestionResponse {
                bid: "2C".parse().unwrap(),
                explanation: "Stayman for the majors".to_string(),
                fallback: false,
                note: None,
            }
        );
    }

    #[test]
    fn test_vet_replaces_illegal_call_with_pass() {
        let response = vet_suggestion(&auction("1NT P 2H"), r#"{"bid": "2C"}"#);
        assert_eq!(response.bid, Call::Pass);
        assert!(response.fallback);
        assert_eq!(
            response.note.as_deref(),
            Some("suggested 2C is illegal: not higher than last bid")
        );

        // South may not double partner's notrump.
        let response = vet_suggestion(&auction("1NT P"), r#"{"bid": "X"}"#);
        assert!(response.fallback);

        // Doubling after a pass with nothing to double.
        let response = vet_suggestion(&auction("P"), r#"{"bid": "X"}"#);
        assert_eq!(
            response.note.as_deref(),
            Some("suggested X is illegal: double not applicable")
        );
    }

    #[test]
    fn test_vet_replaces_unreadable_output_with_pass() {
        let response = vet_suggestion(&auction(""), "The model is overloaded.");
        assert_eq!(response.bid, Call::Pass);
        assert!(response.fallback);
        assert!(response
            .note
            .unwrap()
            .starts_with("unreadable suggestion: unrecognized call"));
    }

    #[test]
    fn test_vet_on_finished_auction() {
        let response = vet_suggestion(&auction("P P P P"), r#"{"bid": "Pass"}"#);
        assert!(response.fallback);
        assert_eq!(
            response.note.as_deref(),
            Some("suggested Pass is illegal: auction already terminal")
        );
    }

    #[test]
    fn test_request_and_response_json() {
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"dealer": "N", "calls": ["1nt", "p"]}"#).unwrap();
        let auction = request.auction().unwrap();
        assert_eq!(auction.len(), 2);

        let response = vet_suggestion(&auction, r#"{"bid": "2d", "explanation": "Transfer"}"#);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"bid":"2D","explanation":"Transfer","fallback":false}"#
        );

        let bad: SuggestionRequest =
            serde_json::from_str(r#"{"dealer": "N", "calls": ["2H", "2C"]}"#).unwrap();
        assert!(bad.auction().is_err());
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let long = "a".repeat(100);
        assert_eq!(excerpt(&long).chars().count(), 41);
        assert_eq!(excerpt(" short "), "short");
    }
}
