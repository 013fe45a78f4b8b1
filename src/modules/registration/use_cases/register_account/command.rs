// Command data type for an account registration submission.
//
// Every field is optional: a missing field is a validation outcome decided
// by `decide_register`, not a transport error.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterAccount {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub password_again: Option<String>,
}
