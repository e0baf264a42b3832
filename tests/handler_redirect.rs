mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_redirect_success() {
    let (state, _rx) = common::create_test_state_with_receiver();
    let (entry, _) = state
        .repository
        .get_or_create("https://example.com/target")
        .await
        .unwrap();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get(&format!("/r/{}", entry.id)).await;

    assert_eq!(response.status_code(), 301);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_escapes_control_characters() {
    let (state, _rx) = common::create_test_state_with_receiver();
    let (entry, _) = state
        .repository
        .get_or_create("https://example.com/a\nSet-Cookie: x=1")
        .await
        .unwrap();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get(&format!("/r/{}", entry.id)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "https://example.com/a%0ASet-Cookie: x=1"
    );
    assert!(response.maybe_header("set-cookie").is_none());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, mut rx) = common::create_test_state_with_receiver();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/r/notfound").await;

    response.assert_status_not_found();
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_submits_click() {
    let (state, mut rx) = common::create_test_state_with_receiver();
    let (entry, _) = state
        .repository
        .get_or_create("https://example.com")
        .await
        .unwrap();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get(&format!("/r/{}", entry.id)).await;
    assert_eq!(response.status_code(), 301);

    let click_event = rx.try_recv();
    assert!(click_event.is_ok());
    assert_eq!(click_event.unwrap().id, entry.id);
}

#[tokio::test]
async fn test_redirect_is_counted() {
    let state = common::create_test_state();
    let repository = state.repository.clone();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let created = server
        .post("/api/encurtar")
        .text("https://example.com/a")
        .await;
    let id = common::id_from_location(created.header("location").to_str().unwrap());

    let response = server.get(&format!("/r/{}", id)).await;
    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/a");

    assert_eq!(common::wait_for_clicks(&repository, &id, 1).await, 1);
}

#[tokio::test]
async fn test_redirect_without_id() {
    let (state, _rx) = common::create_test_state_with_receiver();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/r/").await;

    response.assert_status_not_found();
}
