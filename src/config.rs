use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub bot_token: String,
    pub web_app_url: String,
    pub database_url: String,
    pub public_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The bot token, web-app URL, database URL and public base URL are
    /// required; a missing value is fatal at startup.
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let bot_token =
            env::var("TELEGRAM_BOT_TOKEN").map_err(|_| "TELEGRAM_BOT_TOKEN must be set")?;

        let web_app_url =
            env::var("TELEGRAM_WEB_APP_URL").map_err(|_| "TELEGRAM_WEB_APP_URL must be set")?;

        let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .map_err(|_| "PUBLIC_BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            server_host,
            server_port,
            bot_token,
            web_app_url,
            database_url,
            public_base_url,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Full webhook URL registered with the Telegram Bot API
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook/{}", self.public_base_url, self.bot_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_url_joins_base_and_token() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            bot_token: "123456:ABC-DEF".to_string(),
            web_app_url: "https://app.example.com".to_string(),
            database_url: "postgres://localhost/bot".to_string(),
            public_base_url: "https://bot.example.com".to_string(),
        };

        assert_eq!(
            config.webhook_url(),
            "https://bot.example.com/webhook/123456:ABC-DEF"
        );
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}
