use axum::http::StatusCode;

use crate::shared::core::flash::Flash;

pub const SUCCESS_TARGET: &str = "success";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("The passwords do not match. Try again.")]
    PasswordMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Registration accepted; the response ends with a redirect and no body.
    Redirect {
        target: &'static str,
        status: StatusCode,
    },
    /// Registration rejected; the form is rendered again showing `flash`.
    ShowError { flash: Flash },
}
