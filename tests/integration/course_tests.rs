use crate::common::{authed_client, bearer};
use assert_json_diff::assert_json_eq;
use kavya_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn get_courses_returns_parsed_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/courses")
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"_id":"c1","title":"Rust 101"},{"_id":"c2","title":"Async Rust"}]"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let courses = client.get_courses().await.expect("courses");

    assert_json_eq!(
        courses,
        json!([{"_id": "c1", "title": "Rust 101"}, {"_id": "c2", "title": "Async Rust"}])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn create_course_posts_payload() {
    let mut server = Server::new_async().await;
    let payload = json!({"title": "Ownership", "description": "Borrowing in depth"});
    let mock = server
        .mock("POST", "/api/courses")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(payload.clone()))
        .with_status(201)
        .with_body(r#"{"_id":"c9","title":"Ownership"}"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let created = client.create_course(&payload).await.expect("created");

    assert_eq!(created["_id"], "c9");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_courses_error_uses_server_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/courses")
        .with_status(401)
        .with_body(r#"{"message":"Not authorized, no token"}"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let err = client.get_courses().await.unwrap_err();

    assert_eq!(err.to_string(), "Not authorized, no token");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn create_course_error_on_html_body_uses_fallback() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/courses")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = authed_client(&server);
    let err = client.create_course(&json!({"title": "x"})).await.unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(message, "Failed to create course");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/courses")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = authed_client(&server);
    let err = client.get_courses().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}
