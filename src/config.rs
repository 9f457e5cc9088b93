use std::env;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub allowed_origin: HeaderValue,
    pub sendgrid_api_key: String,
    pub sendgrid_base_url: String,
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // Single allowed browser origin, parsed up front so router
        // assembly cannot fail later.
        let allowed_origin = env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidFrontendUrl)?;

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            allowed_origin,
            sendgrid_api_key: env::var("SENDGRID_API_KEY")
                .map_err(|_| ConfigError::MissingApiKey)?,
            sendgrid_base_url: env::var("SENDGRID_BASE_URL")
                .unwrap_or_else(|_| "https://api.sendgrid.com".to_string()),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "careerflowsh@gmail.com".to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("FRONTEND_URL is not a valid origin")]
    InvalidFrontendUrl,
    #[error("SENDGRID_API_KEY environment variable is required")]
    MissingApiKey,
}
