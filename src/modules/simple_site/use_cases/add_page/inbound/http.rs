use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::simple_site::core::page::PageId;
use crate::shared::infrastructure::html::render;
use crate::shell::state::AppState;

#[derive(Template)]
#[template(path = "simple_site/addpage.html")]
pub struct AddedPage {
    pub id: PageId,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.add_page.handle().await {
        Ok(id) => render(&AddedPage { id }),
        Err(err) => {
            tracing::error!(error = %err, "cannot add page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
