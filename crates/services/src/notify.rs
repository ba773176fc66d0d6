use serde_json::json;
use tracing::{debug, warn};
use vidlens_config::WebhookSettings;

/// Notification kind, mapped to an embed accent color.
#[derive(Debug, Clone, Copy)]
pub enum NotifyKind {
    Signup,
    Premium,
    Info,
}

impl NotifyKind {
    fn color(&self) -> u32 {
        match self {
            NotifyKind::Signup => 0x00ff00,
            NotifyKind::Premium => 0xffd700,
            NotifyKind::Info => 0x7289da,
        }
    }
}

/// Best-effort chat-webhook notifier. Silently disabled when no webhook
/// URL is configured; delivery failures are logged, never propagated.
pub struct Notifier {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl Notifier {
    pub fn new(settings: WebhookSettings) -> Self {
        Self {
            webhook_url: settings.url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, title: &str, description: &str, kind: NotifyKind) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let body = json!({
            "embeds": [{
                "title": title,
                "description": description,
                "color": kind.color(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "footer": { "text": "vidlens alerts" },
            }]
        });

        match self.client.post(url).json(&body).send().await {
            Ok(_) => debug!(title, "Webhook notification sent"),
            Err(error) => warn!(%error, "Webhook notification failed"),
        }
    }
}
