use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use vidlens_analysis::{GenRequest, TextGenBackend};
use vidlens_config::OpenAiSettings;

/// OpenAI chat-completions backend for the analysis tasks.
pub struct OpenAiChatBackend {
    settings: OpenAiSettings,
    client: reqwest::Client,
}

impl OpenAiChatBackend {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextGenBackend for OpenAiChatBackend {
    async fn generate(&self, request: GenRequest) -> anyhow::Result<String> {
        let body = json!({
            "model": self.settings.chat_model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user }
            ],
            "max_tokens": request.max_tokens,
        });

        let response: Value = self
            .client
            .post(format!("{}/chat/completions", self.settings.base_url))
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.get("error") {
            let message = error["message"].as_str().unwrap_or("Unknown error");
            anyhow::bail!("Provider rejected request: {message}");
        }

        let content = response["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .context("No content in completion response")?
            .to_string();

        Ok(content)
    }

    fn name(&self) -> &str {
        "openai-chat"
    }
}
