/// Fixed primary key of the single stats row
pub const STATS_ROW_ID: i32 = 1;

/// Interaction kind recorded for the /start command
pub const INTERACTION_START: &str = "start";

/// Label of the inline button that opens the web app
pub const OPEN_APP_BUTTON_LABEL: &str = "🚀 Open the App 🚀";

/// Body returned by the liveness endpoint
pub const LIVENESS_BODY: &str = "The bot is alive!";

/// Body returned by the webhook endpoint regardless of handler outcome
pub const WEBHOOK_ACK_BODY: &str = "ok";
