use askama::Template;
use axum::response::Response;

use crate::shared::infrastructure::html::render;

#[derive(Template)]
#[template(path = "simple_site/static.html")]
pub struct StaticPage;

pub async fn handle() -> Response {
    render(&StaticPage)
}
