use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Request to send a welcome email
#[derive(Debug, Deserialize)]
pub struct WelcomeEmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response after a successful send
#[derive(Debug, Serialize)]
pub struct WelcomeEmailResponse {
    pub success: String,
}

/// Email routes
pub fn email_routes() -> Router<AppState> {
    Router::new().route("/send-welcome-email", post(send_welcome_email))
}

const WELCOME_SUBJECT: &str = "🚀 Welcome to Career Flow – Your Future Just Got an Upgrade!";

/// Fixed welcome template with the recipient's name interpolated
fn welcome_email_html(name: &str) -> String {
    format!(
        r#"
      <div style="font-family: Arial, sans-serif; line-height: 1.6;">
        <p>Hi {name},</p>
        <p>You’ve just unlocked Career Flow — where careers stop being confusing, and start being exciting. 🎯</p>
        <p>At Career Flow, we don’t just guide you. We walk with you, mentor you, and cheer for you until you hit your career milestones.</p>
        <br>
        <p>See you on the inside,</p>
        <p><strong>The Career Flow Team</strong></p>
      </div>
    "#
    )
}

/// POST /api/send-welcome-email - Send the fixed welcome email
async fn send_welcome_email(
    State(state): State<AppState>,
    Json(request): Json<WelcomeEmailRequest>,
) -> Result<Json<WelcomeEmailResponse>> {
    let (name, email) = match (request.name, request.email) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => (name, email),
        _ => {
            return Err(AppError::BadRequest(
                "Name and email are required fields.".to_string(),
            ))
        }
    };

    let html = welcome_email_html(&name);

    if let Err(e) = state
        .mailer
        .send(email.clone(), WELCOME_SUBJECT.to_string(), html)
        .await
    {
        tracing::error!(error = %e, email = %email, "Error sending welcome email");
        return Err(e);
    }

    tracing::info!(email = %email, "Welcome email sent successfully");

    Ok(Json(WelcomeEmailResponse {
        success: "Email sent successfully!".to_string(),
    }))
}
