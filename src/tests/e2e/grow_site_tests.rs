use axum::http::StatusCode;

use crate::tests::fixtures::app::{get, make_test_app};

async fn listed_ids(app: &axum::Router) -> Vec<u64> {
    serde_json::from_str(&get(app, "/pages.json").await.body).unwrap()
}

#[tokio::test]
async fn grows_the_site_one_page_per_add() {
    let app = make_test_app(1);
    let mut expected = listed_ids(&app).await;

    for _ in 0..3 {
        get(&app, "/addpage").await;
        expected.push(expected.last().map_or(1, |last| last + 1));
        assert_eq!(listed_ids(&app).await, expected);
    }

    let index = get(&app, "/").await.body;
    for id in &expected {
        assert!(index.contains(&format!("<a href='viewpage?id={id}'>page {id}</a>")));
    }
}

#[tokio::test]
async fn resolves_exactly_the_listed_pages() {
    let app = make_test_app(0);
    get(&app, "/addpage").await;
    get(&app, "/addpage").await;
    let listed = listed_ids(&app).await;

    for id in 0..5u64 {
        let status = get(&app, &format!("/viewpage?id={id}")).await.status;
        let expected = if listed.contains(&id) {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        assert_eq!(status, expected, "page {id}");
    }
}

#[tokio::test]
async fn lists_identically_without_intervening_adds() {
    let app = make_test_app(2);

    let first = get(&app, "/").await.body;
    get(&app, "/static").await;
    get(&app, "/viewpage?id=9").await;
    let second = get(&app, "/").await.body;

    assert_eq!(first, second);
}
