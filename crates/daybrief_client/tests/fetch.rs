use daybrief_client::{ConnectError, FetchSettings, HttpSummaryApi, SummaryApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api() -> HttpSummaryApi {
    HttpSummaryApi::new(FetchSettings::default())
}

fn minimal_summary() -> serde_json::Value {
    json!({
        "greeting": "Hello!",
        "summary": { "upcoming_events": 0, "unread_emails": 0 },
        "events": []
    })
}

#[tokio::test]
async fn hello_summary_parses_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .and(query_param("user", "alice@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": "alice@example.com",
            "greeting": "Hello Alice!",
            "summary": { "upcoming_events": 2, "unread_emails": 5 },
            "events": [
                {
                    "id": "evt-1",
                    "summary": "Standup",
                    "start": "2026-08-06T09:30:00-07:00",
                    "end": "2026-08-06T09:45:00-07:00"
                },
                { "summary": "Focus block", "start": null }
            ]
        })))
        .mount(&server)
        .await;

    let response = api()
        .hello_summary(&server.uri(), "alice@example.com")
        .await
        .expect("summary ok");

    assert_eq!(response.greeting, "Hello Alice!");
    assert_eq!(response.summary.upcoming_events, 2);
    assert_eq!(response.summary.unread_emails, 5);
    assert_eq!(response.events.len(), 2);
    assert_eq!(response.events[0].summary, "Standup");
    assert_eq!(response.events[1].start, None);
}

#[tokio::test]
async fn trailing_slash_base_hits_the_same_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(minimal_summary()))
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let response = api().hello_summary(&base, "alice@example.com").await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn email_survives_query_encoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .and(query_param("user", "alice+dev@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(minimal_summary()))
        .mount(&server)
        .await;

    let response = api()
        .hello_summary(&server.uri(), "alice+dev@example.com")
        .await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn error_status_uses_detail_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
        .mount(&server)
        .await;

    let err = api()
        .hello_summary(&server.uri(), "alice@example.com")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ConnectError::Remote {
            message: "boom".to_string(),
        }
    );
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn error_status_with_unparsable_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api()
        .hello_summary(&server.uri(), "alice@example.com")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ConnectError::Remote {
            message: "API request failed".to_string(),
        }
    );
}

#[tokio::test]
async fn unparsable_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api()
        .hello_summary(&server.uri(), "alice@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectError::MalformedResponse(_)));
}

#[tokio::test]
async fn missing_required_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "greeting": "hi" })))
        .mount(&server)
        .await;

    let err = api()
        .hello_summary(&server.uri(), "alice@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectError::MalformedResponse(_)));
}

#[tokio::test]
async fn invalid_base_url_is_rejected() {
    let err = api()
        .hello_summary("not a url", "alice@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectError::InvalidUrl(_)));
}

#[tokio::test]
async fn calendar_events_parses_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/calendar/events"))
        .and(query_param("user", "alice@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": "alice@example.com",
            "events": [
                { "id": "evt-9", "summary": "Offsite", "start": "2026-08-07", "end": "2026-08-08" }
            ]
        })))
        .mount(&server)
        .await;

    let response = api()
        .calendar_events(&server.uri(), "alice@example.com")
        .await
        .expect("events ok");

    assert_eq!(response.user, "alice@example.com");
    assert_eq!(response.events.len(), 1);
    assert_eq!(response.events[0].start.as_deref(), Some("2026-08-07"));
}

#[tokio::test]
async fn recent_messages_parses_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gmail/messages"))
        .and(query_param("user", "alice@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": "alice@example.com",
            "messages": [
                {
                    "id": "m1",
                    "subject": "Q3 plan",
                    "from": "Bob <bob@example.com>",
                    "snippet": "Draft attached"
                }
            ]
        })))
        .mount(&server)
        .await;

    let response = api()
        .recent_messages(&server.uri(), "alice@example.com")
        .await
        .expect("messages ok");

    assert_eq!(response.messages.len(), 1);
    assert_eq!(response.messages[0].sender, "Bob <bob@example.com>");
    assert_eq!(response.messages[0].snippet, "Draft attached");
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let response = api().health(&server.uri()).await.expect("health ok");

    assert_eq!(response.status, "ok");
}
