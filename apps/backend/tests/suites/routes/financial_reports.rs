use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use time::macros::date;

use super::{authed_app, get, post_json};
use crate::common::assert_error;
use crate::support::Fakes;

#[actix_web::test]
async fn query_form_parses_the_period() {
    let fakes = Fakes::default();
    fakes.reports.add_line("4000", Some(1250.5));
    fakes.reports.add_line("4010", None);
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(
        &app,
        get("/api/financialreports/ship/SHIP01?accountPeriod=2024-01-31", &auth),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["accountNumber"], "4000");
    assert_eq!(body[0]["actual"], 1250.5);
    assert_eq!(body[0]["varianceYtd"], 250.5);
    assert_eq!(body[1]["actual"], Value::Null);

    let request = fakes.reports.last_request().unwrap();
    assert_eq!(request.ship_code, "SHIP01");
    assert_eq!(request.account_period, date!(2024 - 01 - 31));
}

#[actix_web::test]
async fn query_form_requires_a_usable_period() {
    let fakes = Fakes::default();
    let (app, auth) = authed_app(&fakes).await;

    for uri in [
        "/api/financialreports/ship/SHIP01",
        "/api/financialreports/ship/SHIP01?accountPeriod=",
        "/api/financialreports/ship/SHIP01?accountPeriod=last-month",
    ] {
        let resp = test::call_service(&app, get(uri, &auth)).await;
        assert_error(resp, StatusCode::BAD_REQUEST, "AccountPeriod is required.").await;
    }

    let resp = test::call_service(
        &app,
        get("/api/financialreports/ship/%20?accountPeriod=2024-01-31", &auth),
    )
    .await;
    assert_error(resp, StatusCode::BAD_REQUEST, "ShipCode cannot be empty.").await;
    assert!(fakes.reports.last_request().is_none());
}

#[actix_web::test]
async fn body_form_checks_ship_codes_then_period() {
    let fakes = Fakes::default();
    let (app, auth) = authed_app(&fakes).await;
    let uri = "/api/financialreports/ship/SHIP01";

    let cases = [
        (json!({ "accountPeriod": "2024-01-31" }), "ShipCode in request body is required."),
        (
            json!({ "shipCode": "SHIP02", "accountPeriod": "2024-01-31" }),
            "ShipCode in URL must match ShipCode in request body.",
        ),
        (json!({ "shipCode": "SHIP01" }), "AccountPeriod is required."),
    ];
    for (body, message) in cases {
        let resp = test::call_service(&app, post_json(uri, &auth, body)).await;
        assert_error(resp, StatusCode::BAD_REQUEST, message).await;
    }

    let resp = test::call_service(
        &app,
        post_json(
            uri,
            &auth,
            json!({ "shipCode": "SHIP01", "accountPeriod": "2024-02-29T00:00:00Z" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        fakes.reports.last_request().unwrap().account_period,
        date!(2024 - 02 - 29)
    );
}

#[actix_web::test]
async fn store_failure_is_500_with_context() {
    let fakes = Fakes::failing();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(
        &app,
        get("/api/financialreports/ship/SHIP01?accountPeriod=2024-01-31", &auth),
    )
    .await;
    assert_error(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred while retrieving the financial report.",
    )
    .await;
}
