pub mod commands;

use crate::telegram::types::Update;
use crate::AppState;

/// A bot command recognized by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stats,
}

/// Parse the command out of a message text
///
/// Telegram prefixes commands with `/` and may suffix them with `@BotName`
/// in group chats; both forms are accepted. Anything else is not a command.
pub fn parse_command(text: &str) -> Option<Command> {
    let first_token = text.trim().split_whitespace().next()?;
    let command = first_token.split('@').next()?;

    match command {
        "/start" => Some(Command::Start),
        "/stats" => Some(Command::Stats),
        _ => None,
    }
}

/// Dispatch one inbound update to the matching command handler
///
/// Updates without a message, messages without text, and unrecognized
/// commands are ignored. Handler failures (a failed send) are logged here;
/// nothing propagates to the webhook endpoint, which acknowledges the update
/// regardless.
pub async fn dispatch(state: &AppState, update: Update) {
    let Some(message) = update.message else {
        tracing::debug!("Update {} carries no message, ignoring", update.update_id);
        return;
    };

    let command = message.text.as_deref().and_then(parse_command);
    let Some(command) = command else {
        tracing::debug!(
            "Message {} in chat {} carries no recognized command, ignoring",
            message.message_id,
            message.chat.id
        );
        return;
    };

    let result = match command {
        Command::Start => commands::start(state, &message).await,
        Command::Stats => commands::stats(state, &message).await,
    };

    if let Err(e) = result {
        tracing::error!("Handler for {:?} failed: {}", command, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(parse_command("/start"), Some(Command::Start));
        assert_eq!(parse_command("/stats"), Some(Command::Stats));
    }

    #[test]
    fn test_parse_command_with_bot_suffix() {
        assert_eq!(parse_command("/start@MiniAppBot"), Some(Command::Start));
        assert_eq!(parse_command("/stats@MiniAppBot"), Some(Command::Stats));
    }

    #[test]
    fn test_parse_command_with_trailing_arguments() {
        assert_eq!(parse_command("/start ref-123"), Some(Command::Start));
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("/unknown"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("start"), None);
    }
}
