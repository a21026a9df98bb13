//! Conversational shortcuts answered before any ranking runs.
//!
//! Greetings, thanks, goodbyes, and human-handoff requests get fixed replies
//! at full confidence. Checks run against whole tokens, in a fixed order, so
//! "hi" does not fire inside "shipping".

use helpdesk_types::reply::{BotReply, MatchMethod};

const GREETING_TOKENS: &[&str] = &["hello", "hey", "hi"];
const FAREWELL_TOKENS: &[&str] = &["bye", "goodbye"];
const HANDOFF_TOKENS: &[&str] = &["agent", "human", "representative", "support"];

pub const GREETING_REPLY: &str = "Hello! How can I help you today?";
pub const THANKS_REPLY: &str = "You're welcome!";
pub const FAREWELL_REPLY: &str = "Goodbye! Have a great day.";
pub const HANDOFF_REPLY: &str =
    "I can connect you to a human agent. Please provide contact details.";

/// Match an utterance's tokens against the shortcut rules.
pub fn shortcut(tokens: &[String]) -> Option<BotReply> {
    let has_any = |needles: &[&str]| tokens.iter().any(|t| needles.contains(&t.as_str()));

    if has_any(GREETING_TOKENS) {
        return Some(BotReply::rule(GREETING_REPLY, MatchMethod::Greeting));
    }
    if tokens.iter().any(|t| t.starts_with("thank")) {
        return Some(BotReply::rule(THANKS_REPLY, MatchMethod::Thanks));
    }
    if has_any(FAREWELL_TOKENS) {
        return Some(BotReply::rule(FAREWELL_REPLY, MatchMethod::Farewell));
    }
    if has_any(HANDOFF_TOKENS) {
        return Some(BotReply::rule(HANDOFF_REPLY, MatchMethod::Handoff));
    }
    None
}
