#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::{assert_error_parts, ErrorBodyLike};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert an error response's status, correlation header and message.
pub async fn assert_error<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_message: &str,
) -> ErrorBodyLike
where
    B: MessageBody,
{
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_error_parts(status, &headers, &body, expected_status, expected_message)
}
