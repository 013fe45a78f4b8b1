use askama::Template;
use axum::{Json, extract::State, response::Response};

use crate::modules::simple_site::core::page::PageId;
use crate::shared::infrastructure::html::render;
use crate::shell::state::AppState;

#[derive(Template)]
#[template(path = "simple_site/index.html")]
pub struct IndexPage {
    pub pages: Vec<PageId>,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    let pages = state.list_pages.handle().await;
    render(&IndexPage { pages })
}

/// Ground truth for harnesses comparing what a crawler found.
pub async fn handle_json(State(state): State<AppState>) -> Json<Vec<PageId>> {
    Json(state.list_pages.handle().await)
}
