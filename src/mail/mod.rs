pub mod sendgrid;

use crate::config::Config;
use crate::error::Result;

/// Mailer abstraction (currently backed by SendGrid)
#[derive(Clone)]
pub struct Mailer {
    inner: sendgrid::SendGridClient,
}

impl Mailer {
    /// Create mailer from loaded configuration (SENDGRID_API_KEY, MAIL_FROM, etc.)
    pub fn from_config(config: &Config) -> Self {
        Self {
            inner: sendgrid::SendGridClient::new(
                config.sendgrid_base_url.clone(),
                config.sendgrid_api_key.clone(),
                config.mail_from.clone(),
            ),
        }
    }

    /// Send a single HTML email
    pub async fn send(&self, to: String, subject: String, html: String) -> Result<()> {
        self.inner.send(to, subject, html).await
    }
}
