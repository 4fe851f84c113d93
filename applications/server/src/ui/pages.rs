/// HTML page routes
use crate::{
    api::multipart::FormParts,
    error::FETCH_FAILED_MESSAGE,
    state::AppState,
    ui::{
        admin::{render_dashboard, render_dashboard_error, render_login},
        form::{FormState, FormValues},
    },
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Html,
    Form,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;

/// GET /
pub async fn form_page() -> Html<String> {
    Html(FormState::default().render())
}

/// POST /
/// Validate the form and, if it passes, create the record and show the wish
pub async fn submit_form(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Html<String>) {
    let state = match FormParts::parse(&headers, body).await {
        Ok(parts) => {
            let values = FormValues::from_parts(&parts);
            let images = parts.files("images");
            FormState::submit(&app_state.submissions, values, images).await
        }
        Err(e) => {
            tracing::warn!("Unreadable form submission: {}", e);
            FormState::failed(FormValues::default())
        }
    };

    (state.status(), Html(state.render()))
}

#[derive(Debug, Deserialize)]
pub struct AdminLogin {
    #[serde(default)]
    pub password: String,
}

/// GET /admin
pub async fn admin_page() -> Html<String> {
    Html(render_login(None))
}

/// POST /admin
/// Compare against the shared secret, then list every record
pub async fn admin_login(
    State(app_state): State<AppState>,
    Form(login): Form<AdminLogin>,
) -> (StatusCode, Html<String>) {
    if login.password != *app_state.admin_password {
        return (
            StatusCode::UNAUTHORIZED,
            Html(render_login(Some("Incorrect password!"))),
        );
    }

    match app_state.submissions.list().await {
        Ok(records) => (
            StatusCode::OK,
            Html(render_dashboard(&records, Utc::now().date_naive())),
        ),
        Err(e) => {
            tracing::error!("Error fetching users: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_dashboard_error(FETCH_FAILED_MESSAGE)),
            )
        }
    }
}
