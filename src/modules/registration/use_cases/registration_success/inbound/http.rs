use askama::Template;
use axum::response::Response;

use crate::shared::infrastructure::html::render;

#[derive(Template)]
#[template(path = "registration/success.html")]
pub struct SuccessPage;

pub async fn handle() -> Response {
    render(&SuccessPage)
}
