//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string postgres://secret")
        .try_with_trace_id(TRACE_ID)
        .expect("valid trace id")
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn conflict_error() -> Error {
    Error::conflict("Email already registered")
        .try_with_trace_id(TRACE_ID)
        .expect("valid trace id")
        .with_details(json!({"field": "email", "code": "email_taken"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn envelope_of(error: &Error, expected_status: StatusCode) -> (FailureEnvelope, Option<String>) {
    let response = ResponseError::error_response(error);
    assert_eq!(response.status(), expected_status);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("failure envelope JSON");
    (envelope, header)
}

#[rstest]
#[actix_web::test]
async fn conflict_keeps_message_details_and_trace_id(conflict_error: Error) {
    let (envelope, header) = envelope_of(&conflict_error, StatusCode::CONFLICT).await;

    assert_eq!(
        envelope,
        FailureEnvelope {
            status: false,
            msg: "Email already registered".to_owned(),
            code: ErrorCode::Conflict,
            details: Some(json!({"field": "email", "code": "email_taken"})),
            trace_id: Some(TRACE_ID.to_owned()),
        }
    );
    assert_eq!(header.as_deref(), Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let (envelope, header) =
        envelope_of(&internal_error, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(envelope.msg, "Internal server error");
    assert!(envelope.details.is_none());
    assert_eq!(envelope.trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(header.as_deref(), Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_header_and_field() {
    let error = Error::unauthorized("Email or Password is incorrect");
    let (envelope, header) = envelope_of(&error, StatusCode::UNAUTHORIZED).await;

    assert!(header.is_none());
    assert!(envelope.trace_id.is_none());
    assert_eq!(envelope.msg, "Email or Password is incorrect");
}

#[rstest]
fn envelope_serialises_with_status_false_and_camel_case() {
    let error = Error::not_found("User not found")
        .try_with_trace_id(TRACE_ID)
        .expect("valid trace id");
    let value = serde_json::to_value(FailureEnvelope::from(&error)).expect("serialise");

    assert_eq!(
        value,
        json!({
            "status": false,
            "msg": "User not found",
            "code": "not_found",
            "traceId": TRACE_ID,
        })
    );
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}

#[derive(serde::Deserialize)]
struct NamedBody {
    #[expect(dead_code, reason = "only deserialised")]
    name: String,
}

async fn echo(_body: web::Json<NamedBody>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().finish()
}

#[rstest]
#[case::malformed("{not json", "application/json", "invalid_json")]
#[case::missing_field("{}", "application/json", "invalid_json")]
#[case::wrong_content_type("{\"name\":\"x\"}", "text/plain", "invalid_content_type")]
#[actix_web::test]
async fn json_extraction_failures_use_the_envelope(
    #[case] body: &'static str,
    #[case] content_type: &'static str,
    #[case] expected_code: &str,
) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let envelope: FailureEnvelope = actix_test::read_body_json(response).await;
    assert!(!envelope.status);
    assert_eq!(envelope.code, ErrorCode::InvalidRequest);
    assert_eq!(
        envelope.details,
        Some(json!({ "code": expected_code }))
    );
}
