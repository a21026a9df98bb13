//! Reply payload returned by the retrieval engine and served over the wire.
//!
//! The HTTP contract only promises the `reply` field; `score`, `method`,
//! `intent_id`, and `image` are diagnostic extras clients may ignore.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which rule or ranker produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Empty or whitespace-only utterance.
    Empty,
    /// Greeting shortcut.
    Greeting,
    /// Thanks shortcut.
    Thanks,
    /// Goodbye shortcut.
    Farewell,
    /// Human-agent handoff shortcut.
    Handoff,
    /// Utterance produced no usable tokens after cleaning.
    NoTokens,
    /// TF-IDF cosine similarity won the ranking.
    Tfidf,
    /// Token-set overlap won the ranking.
    TokenOverlap,
    /// Fuzzy similarity fallback won the ranking.
    Fuzzy,
    /// A ranker won but scored below the confidence threshold.
    LowConfidence,
    /// No ranker produced a usable candidate.
    NoMatch,
    /// Request failed inside the handler.
    Error,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchMethod::Empty => "empty",
            MatchMethod::Greeting => "greeting",
            MatchMethod::Thanks => "thanks",
            MatchMethod::Farewell => "farewell",
            MatchMethod::Handoff => "handoff",
            MatchMethod::NoTokens => "no_tokens",
            MatchMethod::Tfidf => "tfidf",
            MatchMethod::TokenOverlap => "token_overlap",
            MatchMethod::Fuzzy => "fuzzy",
            MatchMethod::LowConfidence => "low_confidence",
            MatchMethod::NoMatch => "no_match",
            MatchMethod::Error => "error",
        };
        write!(f, "{s}")
    }
}

impl FromStr for MatchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(MatchMethod::Empty),
            "greeting" => Ok(MatchMethod::Greeting),
            "thanks" => Ok(MatchMethod::Thanks),
            "farewell" => Ok(MatchMethod::Farewell),
            "handoff" => Ok(MatchMethod::Handoff),
            "no_tokens" => Ok(MatchMethod::NoTokens),
            "tfidf" => Ok(MatchMethod::Tfidf),
            "token_overlap" => Ok(MatchMethod::TokenOverlap),
            "fuzzy" => Ok(MatchMethod::Fuzzy),
            "low_confidence" => Ok(MatchMethod::LowConfidence),
            "no_match" => Ok(MatchMethod::NoMatch),
            "error" => Ok(MatchMethod::Error),
            other => Err(format!("invalid match method: '{other}'")),
        }
    }
}

/// A reply payload: text plus match provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotReply {
    /// The text displayed as the bot's response.
    pub reply: String,
    /// Confidence score of the winning rule or ranker (rules score 1.0).
    pub score: f32,
    /// Which rule or ranker produced the reply.
    pub method: MatchMethod,
    /// Index of the matched FAQ entry, when a ranker matched one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<usize>,
    /// Illustration attached to the matched entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BotReply {
    /// A fixed-text reply from a conversational rule (score 1.0).
    pub fn rule(reply: impl Into<String>, method: MatchMethod) -> Self {
        Self {
            reply: reply.into(),
            score: 1.0,
            method,
            intent_id: None,
            image: None,
        }
    }

    /// A fixed-text reply with zero confidence (prompts, fallbacks).
    pub fn canned(reply: impl Into<String>, method: MatchMethod) -> Self {
        Self {
            reply: reply.into(),
            score: 0.0,
            method,
            intent_id: None,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display_round_trips_through_from_str() {
        for method in [
            MatchMethod::Greeting,
            MatchMethod::Tfidf,
            MatchMethod::TokenOverlap,
            MatchMethod::LowConfidence,
        ] {
            let parsed: MatchMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&MatchMethod::TokenOverlap).unwrap();
        assert_eq!(json, r#""token_overlap""#);
    }

    #[test]
    fn reply_omits_absent_intent_and_image() {
        let reply = BotReply::rule("Hello! How can I help you today?", MatchMethod::Greeting);
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains(r#""reply":"Hello! How can I help you today?""#));
        assert!(!json.contains("intent_id"));
        assert!(!json.contains("image"));
    }
}
