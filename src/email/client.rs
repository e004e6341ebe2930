use std::time::Duration;

use async_trait::async_trait;

use super::{EmailError, Mail, SendResponse};

/// Delivery seam for the dispatch worker. Production uses [`MailtrapClient`];
/// tests substitute a recording implementation.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, mail: Mail) -> Result<SendResponse, EmailError>;
}

/// Thin client for the Mailtrap transactional send API.
pub struct MailtrapClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl MailtrapClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, EmailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl EmailSender for MailtrapClient {
    async fn send(&self, mail: Mail) -> Result<SendResponse, EmailError> {
        let url = format!("{}/api/send", self.api_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&mail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<SendResponse>().await?)
    }
}
