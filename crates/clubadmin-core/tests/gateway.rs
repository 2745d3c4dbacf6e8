mod common;

use clubadmin_core::api::NETWORK_ERROR_MESSAGE;
use clubadmin_core::auth::MemoryTokenStore;
use clubadmin_core::models::{PlanInput, Sport};
use clubadmin_core::{ApiError, TokenStore};
use mockito::{Matcher, Server};
use reqwest::StatusCode;

use common::{base_url, client, UNREACHABLE_BASE};

#[tokio::test]
async fn test_bearer_header_attached_when_signed_in() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/sport/all")
        .match_header("authorization", "Bearer T1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"name":"Football"}]"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("T1");
    let api = client(&base_url(&server), &store);
    let sports = api.fetch_sports().await.expect("sports should load");

    m.assert_async().await;
    assert_eq!(sports, vec![Sport { id: 1, name: "Football".to_string() }]);
}

#[tokio::test]
async fn test_no_header_when_signed_out() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/club/all")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let store = MemoryTokenStore::new();
    let api = client(&base_url(&server), &store);
    let err = api.fetch_clubs().await.expect_err("backend rejects anonymous calls");

    m.assert_async().await;
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Unauthorized");
}

#[tokio::test]
async fn test_header_tracks_credential_changes() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/api/plan/all")
        .match_header("authorization", "Bearer OLD")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/plan/all")
        .match_header("authorization", "Bearer NEW")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("OLD");
    let api = client(&base_url(&server), &store);
    api.fetch_plans().await.expect("first call");
    store.store("NEW").expect("replace token");
    api.fetch_plans().await.expect("second call");

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_message_field_surfaces() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/plan/add")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"price must be positive"}"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("T1");
    let api = client(&base_url(&server), &store);
    let input = PlanInput {
        name: "Broken".to_string(),
        price: "-1".to_string(),
        duration: 30,
    };
    let err = api.add_plan(&input).await.expect_err("validation failure");

    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(err.user_message(), "price must be positive");
}

#[tokio::test]
async fn test_connection_failure_uses_fallback() {
    let store = MemoryTokenStore::with_token("T1");
    let api = client(UNREACHABLE_BASE, &store);
    let err = api.fetch_users().await.expect_err("nothing is listening");

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/user/all")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("T1");
    let api = client(&base_url(&server), &store);
    let err = api.fetch_users().await.expect_err("html is not a user list");

    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.user_message(), "Invalid response from server");
}

#[tokio::test]
async fn test_transactions_send_page_query() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/transaction/all")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"count":11,"rows":[{"id":11,"user_id":3,"amount":"12.00","type":"subscription","status":"succeeded","paymentIntentId":"pi_9","refundStatus":null}]}"#)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("T1");
    let api = client(&base_url(&server), &store);
    let page = api.fetch_transactions(2, 10).await.expect("page should load");

    m.assert_async().await;
    assert_eq!(page.count, 11);
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.page_count(10), 2);
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("DELETE", "/api/sport/delete/4")
        .with_status(204)
        .create_async()
        .await;

    let store = MemoryTokenStore::with_token("T1");
    let api = client(&base_url(&server), &store);
    api.delete_sport(4).await.expect("delete should succeed");
    m.assert_async().await;
}
