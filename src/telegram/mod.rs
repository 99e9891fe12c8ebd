pub mod client;
pub mod types;

pub use client::{BotApi, TelegramClient};
pub use types::{
    Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, TelegramUser, Update, WebAppInfo,
};
