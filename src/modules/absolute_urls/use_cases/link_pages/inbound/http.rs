use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::Response,
};

use crate::shared::core::links::{absolute_url, server_name};
use crate::shared::infrastructure::html::render;
use crate::shell::state::AppState;

pub const LINK_TARGET_PATH: &str = "absolute_urls/link";

#[derive(Template)]
#[template(path = "absolute_urls/index.html")]
pub struct AbsoluteIndexPage {
    pub link: String,
}

#[derive(Template)]
#[template(path = "absolute_urls/link.html")]
pub struct AbsoluteLinkPage;

/// Page whose only way forward is a fully qualified link. The server name
/// comes from the `Host` header, the port from the listening configuration.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(server_name)
        .filter(|name| !name.is_empty())
        .unwrap_or(state.config.host.as_str());
    let link = absolute_url(host, state.config.port, LINK_TARGET_PATH);
    render(&AbsoluteIndexPage { link })
}

pub async fn link() -> Response {
    render(&AbsoluteLinkPage)
}
