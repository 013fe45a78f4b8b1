// Pure decision function for account registration.
//
// Rules, first match wins
// - No submission, or any field absent or empty: MissingFields.
// - Password and confirmation differ: PasswordMismatch.
// - Otherwise redirect to the success page.
//
// Usernames are never checked for uniqueness.

use axum::http::StatusCode;

use crate::modules::registration::use_cases::register_account::command::RegisterAccount;
use crate::modules::registration::use_cases::register_account::decision::{
    DecideError, Decision, SUCCESS_TARGET,
};
use crate::shared::core::flash::Flash;

pub fn decide_register(submission: Option<RegisterAccount>) -> Decision {
    match validate(submission.as_ref()) {
        Ok(()) => Decision::Redirect {
            target: SUCCESS_TARGET,
            status: StatusCode::SEE_OTHER,
        },
        Err(reason) => Decision::ShowError {
            flash: Flash::error(reason.to_string()),
        },
    }
}

fn validate(submission: Option<&RegisterAccount>) -> Result<(), DecideError> {
    let command = submission.ok_or(DecideError::MissingFields)?;
    let required = [
        &command.username,
        &command.first_name,
        &command.last_name,
        &command.password,
        &command.password_again,
    ];
    if required.iter().any(|field| !is_filled(field)) {
        return Err(DecideError::MissingFields);
    }
    if command.password != command.password_again {
        return Err(DecideError::PasswordMismatch);
    }
    Ok(())
}

fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}
