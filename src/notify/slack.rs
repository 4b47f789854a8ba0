use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{DeliveryError, Notifier};
use crate::config::Config;

pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";

#[derive(Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
    mrkdwn: bool,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Posts via the Web API `chat.postMessage` method with a bot token.
pub struct SlackNotifier {
    api_base_url: String,
    token: String,
    channel: String,
    client: Client,
}

impl SlackNotifier {
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.slack_api_base_url, &cfg.token, &cfg.channel)
    }

    pub fn new(api_base_url: &str, token: &str, channel: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            channel: channel.to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post_message(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/chat.postMessage", self.api_base_url);
        let body = PostMessage {
            channel: &self.channel,
            text,
            mrkdwn: true,
        };

        let mut req = self.client.post(url).json(&body);
        // An unset token goes out without auth; Slack answers `not_authed`.
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        let parsed: ApiResponse = serde_json::from_slice(&bytes)?;
        if parsed.ok {
            tracing::debug!(channel = %self.channel, "slack accepted message");
            Ok(())
        } else {
            Err(DeliveryError::Rejected(
                parsed.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "Slack"
    }
}
