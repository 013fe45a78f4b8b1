use axum::http::StatusCode;

use crate::tests::fixtures::app::{get, make_test_app, post_form};
use crate::tests::fixtures::commands::register_account::RegisterAccountBuilder;

#[tokio::test]
async fn registers_and_follows_the_redirect_to_success() {
    let app = make_test_app(0);

    let form_page = get(&app, "/register").await;
    assert!(form_page.body.contains("All fields are required."));

    let submitted = post_form(&app, "/register", &RegisterAccountBuilder::new().form_body()).await;
    assert_eq!(submitted.status, StatusCode::SEE_OTHER);

    let location = submitted.headers["location"].to_str().unwrap();
    let success = get(&app, &format!("/{location}")).await;
    assert_eq!(success.status, StatusCode::OK);
    assert!(!success.body.contains("All fields are required."));
}

#[tokio::test]
async fn retries_after_a_mismatch_and_then_succeeds() {
    let app = make_test_app(0);

    let mismatch = RegisterAccountBuilder::new()
        .password_again(Some("y"))
        .form_body();
    let rejected = post_form(&app, "/register", &mismatch).await;
    assert_eq!(rejected.status, StatusCode::OK);
    assert!(rejected.body.contains("The passwords do not match. Try again."));

    let accepted = post_form(&app, "/register", &RegisterAccountBuilder::new().form_body()).await;
    assert_eq!(accepted.status, StatusCode::SEE_OTHER);
    assert_eq!(accepted.headers["location"], "success");
}

#[tokio::test]
async fn leaves_the_page_registry_untouched() {
    let app = make_test_app(1);

    post_form(&app, "/register", &RegisterAccountBuilder::new().form_body()).await;

    assert_eq!(get(&app, "/pages.json").await.body, "[1]");
}
