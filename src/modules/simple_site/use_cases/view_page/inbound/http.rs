use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::simple_site::core::page::PageId;
use crate::modules::simple_site::use_cases::view_page::decision::ViewPageError;
use crate::shared::infrastructure::html::render;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ViewPageParams {
    pub id: Option<String>,
}

#[derive(Template)]
#[template(path = "simple_site/viewpage.html")]
pub struct ViewedPage {
    pub id: PageId,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ViewPageParams>,
) -> Response {
    let Some(id) = params.id.as_deref().and_then(|raw| raw.parse::<PageId>().ok()) else {
        tracing::debug!(id = ?params.id, "rejecting malformed page id");
        return StatusCode::BAD_REQUEST.into_response();
    };

    match state.view_page.handle(id).await {
        Ok(id) => render(&ViewedPage { id }),
        Err(err @ ViewPageError::NotFound(_)) => {
            tracing::debug!(error = %err, "page lookup missed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
