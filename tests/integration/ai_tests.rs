use crate::common::authed_client;
use kavya_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn ai_query_posts_course_and_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/query")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"courseId": "c-7", "query": "Explain borrowing"}),
        ))
        .with_status(200)
        .with_body(r#"{"answer":"Borrowing lets you reference data without owning it."}"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let answer = client
        .ai_query(Some("c-7"), "Explain borrowing")
        .await
        .expect("answer");

    assert!(answer["answer"].as_str().unwrap().starts_with("Borrowing"));
    mock.assert_async().await;
}

#[tokio::test]
async fn ai_query_without_course_omits_course_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ai/query")
        .match_body(Matcher::Json(json!({"query": "Hi"})))
        .with_status(200)
        .with_body(r#"{"answer":"Hello!"}"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let answer = client.ai_query(None, "Hi").await.expect("answer");

    assert_eq!(answer["answer"], "Hello!");
    mock.assert_async().await;
}

#[tokio::test]
async fn ai_query_failure_uses_server_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/ai/query")
        .with_status(429)
        .with_body(r#"{"message":"AI quota exceeded"}"#)
        .create_async()
        .await;

    let client = authed_client(&server);
    let err = client.ai_query(None, "Hi").await.unwrap_err();

    assert_eq!(err.to_string(), "AI quota exceeded");
    assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
}
