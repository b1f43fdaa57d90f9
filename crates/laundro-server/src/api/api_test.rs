use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const BARS_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9702!3d47.9154!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn";
const ZAISAN_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9161!3d47.8868!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn";

fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(1_000, Duration::from_secs(60))
}

fn test_app(mailer: Option<MailClient>) -> Router {
    let state = AppState {
        directory: Arc::new(laundro_core::builtin_directory()),
        mailer,
    };
    build_app(state, default_rate_limit_state())
}

fn mailer_for(server: &MockServer) -> MailClient {
    MailClient::new(&format!("{}/send", server.uri()), 5, "laundro-test/0.1")
        .expect("mail client")
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    read_json(response).await
}

async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    read_json(response).await
}

async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-request-id", "req-raw")
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn ids(json: &Value) -> Vec<String> {
    json["data"]["branches"]
        .as_array()
        .expect("branches array")
        .iter()
        .map(|b| b["id"].as_str().expect("id").to_string())
        .collect()
}

fn valid_contact() -> Value {
    json!({
        "name": "Болд",
        "email": "bold@example.mn",
        "phone": "9911-2233",
        "message": "Угаалгын машин захиалах боломжтой юу?"
    })
}

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("not_found", StatusCode::NOT_FOUND),
        ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
        ("mail_unavailable", StatusCode::SERVICE_UNAVAILABLE),
        ("mail_failed", StatusCode::BAD_GATEWAY),
        ("something_else", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "msg").into_response();
        assert_eq!(response.status(), status, "code {code}");
    }
}

#[test]
fn error_body_omits_empty_fields() {
    let err = ApiError::new("req-1", "not_found", "missing");
    let json = serde_json::to_value(&err).expect("serialize");
    assert!(json["error"].get("fields").is_none());
    assert_eq!(json["meta"]["request_id"], "req-1");
}

#[tokio::test]
async fn health_reports_branch_count_and_mail_state() {
    let (status, json) = get_json(test_app(None), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["branches"], 7);
    assert_eq!(json["data"]["mail"], "disabled");
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let response = test_app(None)
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(b"abc-123".as_slice())
    );
    let (_, json) = read_json(response).await;
    assert_eq!(json["meta"]["request_id"], "abc-123");
}

#[tokio::test]
async fn list_branches_without_filters_returns_catalog_order() {
    let (status, json) = get_json(test_app(None), "/api/v1/branches").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&json),
        vec![
            "sansar",
            "brs-01",
            "zaisan",
            "yarmag",
            "3-4-khoroolol",
            "dund-gol",
            "nogoon-nuur"
        ]
    );
    assert_eq!(json["data"]["total"], 7);
    assert!(json["data"]["selected"].is_null());
    assert_eq!(
        json["data"]["map_locator"],
        laundro_core::builtin_directory().locators.default_locator()
    );
}

#[tokio::test]
async fn list_branches_requires_every_requested_service() {
    let (_, json) = get_json(test_app(None), "/api/v1/branches?services=Wi-Fi,Detergent").await;
    assert_eq!(ids(&json), vec!["sansar", "3-4-khoroolol"]);
    assert_eq!(json["data"]["criteria"]["services"], json!(["Detergent", "Wi-Fi"]));
}

#[tokio::test]
async fn list_branches_search_is_case_insensitive() {
    let (_, json) = get_json(test_app(None), "/api/v1/branches?q=EMART").await;
    assert_eq!(ids(&json), vec!["sansar"]);
}

#[tokio::test]
async fn list_branches_treats_all_as_unconstrained() {
    let (_, json) = get_json(
        test_app(None),
        "/api/v1/branches?district=all&hours=08:00-00:00",
    )
    .await;
    assert_eq!(json["data"]["total"], 7);
    assert!(json["data"]["criteria"]["district"].is_null());
    assert_eq!(json["data"]["criteria"]["hours"], "08:00-00:00");
}

#[tokio::test]
async fn list_branches_with_no_match_is_empty_not_error() {
    let (status, json) = get_json(test_app(None), "/api/v1/branches?services=Sauna").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&json).is_empty());
    assert_eq!(json["data"]["total"], 0);
}

#[tokio::test]
async fn list_branches_selected_branch_resolves_map_by_name() {
    let (_, json) = get_json(test_app(None), "/api/v1/branches?selected=brs-01").await;
    assert_eq!(json["data"]["selected"]["id"], "brs-01");
    assert_eq!(json["data"]["map_locator"], BARS_EMBED);
}

#[tokio::test]
async fn list_branches_keeps_selection_hidden_by_filters() {
    let (_, json) = get_json(
        test_app(None),
        "/api/v1/branches?services=Detergent&selected=brs-01",
    )
    .await;
    assert!(!ids(&json).contains(&"brs-01".to_string()));
    assert_eq!(json["data"]["selected"]["id"], "brs-01");
}

#[tokio::test]
async fn districts_are_sorted_and_distinct() {
    let (_, json) = get_json(test_app(None), "/api/v1/branches/districts").await;
    let districts: Vec<String> =
        serde_json::from_value(json["data"].clone()).expect("district list");
    let mut sorted = districts.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(districts, sorted);
    assert_eq!(districts.len(), 5);
}

#[tokio::test]
async fn services_keep_first_encounter_order() {
    let (_, json) = get_json(test_app(None), "/api/v1/branches/services").await;
    assert_eq!(
        json["data"],
        json!(["Self-service", "Wash & Dry", "Wi-Fi", "Detergent"])
    );
}

#[tokio::test]
async fn get_branch_returns_detail_with_locator() {
    let (status, json) = get_json(test_app(None), "/api/v1/branches/zaisan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["branch"]["id"], "zaisan");
    assert_eq!(json["data"]["map_locator"], ZAISAN_EMBED);
}

#[tokio::test]
async fn get_branch_unknown_id_is_not_found() {
    let (status, json) = get_json(test_app(None), "/api/v1/branches/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn map_falls_back_to_default_for_unmapped_and_unknown() {
    let default = laundro_core::builtin_directory()
        .locators
        .default_locator()
        .to_string();

    let (_, unmapped) = get_json(test_app(None), "/api/v1/map?branch=dund-gol").await;
    assert_eq!(unmapped["data"]["branch_id"], "dund-gol");
    assert_eq!(unmapped["data"]["locator"], default.as_str());

    let (status, unknown) = get_json(test_app(None), "/api/v1/map?branch=ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert!(unknown["data"]["branch_id"].is_null());
    assert_eq!(unknown["data"]["locator"], default.as_str());

    let (_, none) = get_json(test_app(None), "/api/v1/map").await;
    assert_eq!(none["data"]["locator"], default.as_str());
}

#[tokio::test]
async fn chat_redirects_franchise_questions() {
    let (status, json) = post_json(
        test_app(None),
        "/api/v1/chat",
        &json!({ "text": "Франчайз авах боломжтой юу?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["action"], "redirect");
    assert_eq!(json["data"]["to"], "/franchise");
    assert_eq!(json["data"]["after_ms"], 3_000);
}

#[tokio::test]
async fn chat_escalates_after_repeated_fallbacks() {
    let fallback = laundro_core::chatbot::FALLBACK_REPLY;
    let body = json!({
        "history": [
            { "role": "user", "text": "xyz" },
            { "role": "bot", "text": fallback },
            { "role": "user", "text": "qwe" },
            { "role": "bot", "text": fallback }
        ],
        "text": "asdf"
    });
    let (_, json) = post_json(test_app(None), "/api/v1/chat", &body).await;
    assert_eq!(json["data"]["action"], "redirect");
    assert_eq!(json["data"]["to"], "/contact");
}

#[tokio::test]
async fn invalid_form_lists_failing_fields() {
    let body = json!({
        "name": "Б",
        "email": "not-an-email",
        "phone": "9911-2233",
        "message": "Сайн байна уу, асуулт байна."
    });
    let (status, json) = post_json(test_app(None), "/api/v1/forms/contact", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    let fields: Vec<&str> = json["error"]["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["name", "email"]);
}

#[tokio::test]
async fn valid_form_without_mailer_is_unavailable() {
    let (status, json) =
        post_json(test_app(None), "/api/v1/forms/contact", &valid_contact()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "mail_unavailable");
}

#[tokio::test]
async fn valid_form_is_forwarded_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_partial_json(json!({ "kind": "contact", "reply_to": "bold@example.mn" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(Some(mailer_for(&server)));
    let (status, json) = post_json(app, "/api/v1/forms/contact", &valid_contact()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["kind"], "contact");
    assert_eq!(json["data"]["status"], "sent");
}

#[tokio::test]
async fn mail_service_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({
        "name": "Ану",
        "email": "anu@example.mn",
        "phone": "8800-4455",
        "position": "Оператор",
        "experience": "2 жил",
        "message": "Оройн ээлжинд ажиллах сонирхолтой байна."
    });
    let app = test_app(Some(mailer_for(&server)));
    let (status, json) = post_json(app, "/api/v1/forms/job-application", &body).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "mail_failed");
}

#[tokio::test]
async fn rate_limit_rejects_requests_over_the_window() {
    let state = AppState {
        directory: Arc::new(laundro_core::builtin_directory()),
        mailer: None,
    };
    let app = build_app(state, RateLimitState::new(1, Duration::from_secs(60)));

    let (first, _) = get_json(app.clone(), "/api/v1/branches/districts").await;
    assert_eq!(first, StatusCode::OK);

    let (second, json) = get_json(app.clone(), "/api/v1/branches/services").await;
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "rate_limited");
    assert!(json["meta"]["request_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json["meta"]["timestamp"].is_string());

    let (health, _) = get_json(app, "/api/v1/health").await;
    assert_eq!(health, StatusCode::OK);
}

#[tokio::test]
async fn truncated_form_body_uses_error_envelope() {
    let (status, json) = post_raw(test_app(None), "/api/v1/forms/contact", r#"{"name": 1"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
    assert_eq!(json["meta"]["request_id"], "req-raw");
}

#[tokio::test]
async fn mistyped_form_field_is_bad_request() {
    let (status, json) = post_raw(
        test_app(None),
        "/api/v1/forms/franchise",
        r#"{"name": 1, "email": "a@b.mn", "phone": "9911-2233", "city": "Дархан", "investment": "x", "message": "0123456789"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn chat_without_text_is_bad_request() {
    let (status, json) = post_raw(test_app(None), "/api/v1/chat", r#"{"history": []}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}
