//! One-shot engine query from the terminal.
//!
//! Useful for smoke-testing a pack without starting the server:
//!
//! ```bash
//! hdesk ask "how do I track my order"
//! hdesk ask --json "bye"
//! ```

use anyhow::Result;
use console::style;
use dialoguer::Input;

use helpdesk_types::reply::{BotReply, MatchMethod};

use crate::http::handlers::message::ENGINE_FALLBACK_REPLY;
use crate::state::AppState;

/// Run one utterance through the engine and print the reply.
pub fn ask(state: &AppState, text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("You").interact_text()?,
    };

    let reply = state
        .engine
        .respond(&text)
        .unwrap_or_else(|| BotReply::canned(ENGINE_FALLBACK_REPLY, MatchMethod::NoMatch));

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("Bot:").cyan().bold(), reply.reply);
    if let Some(image) = &reply.image {
        println!("  {} {}", style("Image:").bold(), image);
    }
    println!(
        "  {}",
        style(format!("method: {}  score: {:.2}", reply.method, reply.score)).dim()
    );
    println!();

    Ok(())
}
