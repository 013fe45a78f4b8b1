use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Renders an askama template into an HTML response. Render failures are
/// logged and answered with a bare 500.
pub fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
