use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use vidlens_services::NotifyKind;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupNotification {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct PremiumNotification {
    pub email: String,
    pub plan: String,
}

#[derive(Serialize)]
pub struct NotifyResponse {
    pub success: bool,
}

/// POST /api/notify-signup, best-effort webhook ping for a new signup.
pub async fn notify_signup(
    State(state): State<AppState>,
    Json(body): Json<SignupNotification>,
) -> Json<NotifyResponse> {
    let description = format!(
        "**Email:** {}\n**Name:** {}",
        body.email,
        body.name.as_deref().unwrap_or("Not provided")
    );
    state
        .notifier
        .send("New signup!", &description, NotifyKind::Signup)
        .await;
    Json(NotifyResponse { success: true })
}

/// POST /api/notify-premium, best-effort webhook ping for a new subscription.
pub async fn notify_premium(
    State(state): State<AppState>,
    Json(body): Json<PremiumNotification>,
) -> Json<NotifyResponse> {
    let description = format!("**Email:** {}\n**Plan:** {}", body.email, body.plan);
    state
        .notifier
        .send("New premium subscription!", &description, NotifyKind::Premium)
        .await;
    Json(NotifyResponse { success: true })
}
