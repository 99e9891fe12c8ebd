pub mod health;
pub mod webhook;

pub use health::liveness;
pub use webhook::{receive_update, register_webhook};
