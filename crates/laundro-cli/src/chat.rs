//! One-shot FAQ bot queries.

use laundro_core::ReplyAction;

/// Renders a bot answer for the terminal.
pub(crate) fn render_reply(action: &ReplyAction) -> String {
    match action {
        ReplyAction::Reply { text } => text.clone(),
        ReplyAction::Redirect { text, after_ms, to } => {
            format!("{text}\nredirect: {to} (after {after_ms} ms)")
        }
    }
}

/// Answers `text` with no prior conversation.
///
/// # Errors
///
/// Returns an error only if JSON output is requested and serialization fails.
pub(crate) fn run(text: &str, json: bool) -> anyhow::Result<()> {
    let action = laundro_core::reply(&[], text);
    if json {
        println!("{}", serde_json::to_string_pretty(&action)?);
    } else {
        println!("{}", render_reply(&action));
    }
    Ok(())
}
