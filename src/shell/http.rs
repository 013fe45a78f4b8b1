use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::absolute_urls::use_cases::link_pages::inbound::http as absolute_http;
use crate::modules::registration::use_cases::register_account::inbound::http as register_http;
use crate::modules::registration::use_cases::registration_success::inbound::http as success_http;
use crate::modules::simple_site::use_cases::add_page::inbound::http as add_http;
use crate::modules::simple_site::use_cases::list_pages::inbound::http as list_http;
use crate::modules::simple_site::use_cases::static_page::inbound::http as static_http;
use crate::modules::simple_site::use_cases::view_page::inbound::http as view_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_http::handle))
        .route("/pages.json", get(list_http::handle_json))
        .route("/addpage", get(add_http::handle).post(add_http::handle))
        .route("/viewpage", get(view_http::handle))
        .route("/static", get(static_http::handle))
        .route(
            "/register",
            get(register_http::show).post(register_http::submit),
        )
        .route("/success", get(success_http::handle))
        .route("/absolute_urls/", get(absolute_http::index))
        .route("/absolute_urls/index", get(absolute_http::index))
        .route("/absolute_urls/link", get(absolute_http::link))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
