use askama::Template;
use axum::{
    Form,
    extract::{OriginalUri, rejection::FormRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::registration::use_cases::register_account::command::RegisterAccount;
use crate::modules::registration::use_cases::register_account::decide::decide_register;
use crate::modules::registration::use_cases::register_account::decision::Decision;
use crate::shared::infrastructure::html::render;

#[derive(Deserialize)]
pub struct RegisterAccountForm {
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password: Option<String>,
    pub againpass: Option<String>,
}

impl From<RegisterAccountForm> for RegisterAccount {
    fn from(form: RegisterAccountForm) -> Self {
        Self {
            username: form.username,
            first_name: form.firstname,
            last_name: form.lastname,
            password: form.password,
            password_again: form.againpass,
        }
    }
}

#[derive(Template)]
#[template(path = "registration/register.html")]
pub struct RegisterPage {
    pub action: String,
    pub error: Option<String>,
}

/// Initial visit. There is no submission, so the form always carries the
/// missing-fields banner.
pub async fn show(OriginalUri(uri): OriginalUri) -> Response {
    respond(uri.path(), decide_register(None))
}

pub async fn submit(
    OriginalUri(uri): OriginalUri,
    form: Result<Form<RegisterAccountForm>, FormRejection>,
) -> Response {
    let submission = match form {
        Ok(Form(body)) => Some(RegisterAccount::from(body)),
        Err(rejection) => {
            tracing::debug!(%rejection, "treating undecodable registration body as empty");
            None
        }
    };
    respond(uri.path(), decide_register(submission))
}

fn respond(action: &str, decision: Decision) -> Response {
    match decision {
        Decision::Redirect { target, status } => {
            tracing::debug!(location = target, "registration accepted");
            (status, [(header::LOCATION, target)]).into_response()
        }
        Decision::ShowError { mut flash } => {
            let error = flash.take_error();
            tracing::debug!(error = ?error, "registration rejected");
            render(&RegisterPage {
                action: action.to_string(),
                error,
            })
        }
    }
}
