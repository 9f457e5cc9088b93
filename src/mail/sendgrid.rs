use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct SendGridClient {
    client: Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl SendGridClient {
    /// base_url is overridable so tests can stand in for the real API
    pub fn new(base_url: String, api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            from,
        }
    }

    pub async fn send(&self, to: String, subject: String, html: String) -> Result<()> {
        #[derive(Serialize)]
        struct Payload {
            personalizations: Vec<Personalization>,
            from: Address,
            subject: String,
            content: Vec<Content>,
        }

        #[derive(Serialize)]
        struct Personalization {
            to: Vec<Address>,
        }

        #[derive(Serialize)]
        struct Address {
            email: String,
        }

        #[derive(Serialize)]
        struct Content {
            #[serde(rename = "type")]
            content_type: String,
            value: String,
        }

        let payload = Payload {
            personalizations: vec![Personalization {
                to: vec![Address { email: to }],
            }],
            from: Address {
                email: self.from.clone(),
            },
            subject,
            content: vec![Content {
                content_type: "text/html".to_string(),
                value: html,
            }],
        };

        // SendGrid answers 202 Accepted on success
        let res = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::MailDelivery(format!(
                "SendGrid API error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }
}
