mod assignments;
mod financial_reports;
mod users;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{test, Error};

use crate::support::auth::bearer_header;
use crate::support::{create_test_app, Fakes};

/// Production app over `fakes`, plus an admin Authorization header value.
pub(crate) async fn authed_app(
    fakes: &Fakes,
) -> (
    impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
    String,
) {
    let state = fakes.state();
    let auth = bearer_header("admin", &state.security);
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("app should build");
    (app, auth)
}

pub(crate) fn get(uri: &str, auth: &str) -> Request {
    test::TestRequest::get()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, auth.to_string()))
        .to_request()
}

pub(crate) fn delete(uri: &str, auth: &str) -> Request {
    test::TestRequest::delete()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, auth.to_string()))
        .to_request()
}

pub(crate) fn post_json(uri: &str, auth: &str, body: serde_json::Value) -> Request {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, auth.to_string()))
        .set_json(body)
        .to_request()
}

pub(crate) fn put_json(uri: &str, auth: &str, body: serde_json::Value) -> Request {
    test::TestRequest::put()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, auth.to_string()))
        .set_json(body)
        .to_request()
}
