use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use super::{authed_app, get, post_json};
use crate::common::assert_error;
use crate::support::Fakes;

const ASSIGN: &str = "/api/usershipassignments/assign";
const UNASSIGN: &str = "/api/usershipassignments/unassign";

#[actix_web::test]
async fn assign_then_list_then_unassign() {
    let fakes = Fakes::default();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(
        &app,
        post_json(ASSIGN, &auth, json!({ "userId": 4, "shipCode": "SHIP01" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["userId"], 4);
    assert_eq!(body["shipCode"], "SHIP01");
    assert_eq!(body["assignedDate"], "1970-01-01T00:00:00Z");

    test::call_service(
        &app,
        post_json(ASSIGN, &auth, json!({ "userId": 5, "shipCode": "SHIP01" })),
    )
    .await;
    test::call_service(
        &app,
        post_json(ASSIGN, &auth, json!({ "userId": 4, "shipCode": "SHIP02" })),
    )
    .await;

    let all: Value =
        test::call_and_read_body_json(&app, get("/api/usershipassignments", &auth)).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let filtered: Value = test::call_and_read_body_json(
        &app,
        get("/api/usershipassignments?userId=4&shipCode=SHIP02", &auth),
    )
    .await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let by_user: Value =
        test::call_and_read_body_json(&app, get("/api/usershipassignments/user/4", &auth)).await;
    assert_eq!(by_user.as_array().unwrap().len(), 2);

    let by_ship: Value = test::call_and_read_body_json(
        &app,
        get("/api/usershipassignments/ship/SHIP01", &auth),
    )
    .await;
    assert_eq!(by_ship.as_array().unwrap().len(), 2);

    let resp = test::call_service(
        &app,
        post_json(UNASSIGN, &auth, json!({ "userId": 4, "shipCode": "SHIP01" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(fakes.assignments.len(), 2);

    let resp = test::call_service(
        &app,
        post_json(UNASSIGN, &auth, json!({ "userId": 4, "shipCode": "SHIP01" })),
    )
    .await;
    assert_error(resp, StatusCode::NOT_FOUND, "Ship assignment not found.").await;
}

#[actix_web::test]
async fn assignment_keys_are_validated() {
    let fakes = Fakes::default();
    let (app, auth) = authed_app(&fakes).await;

    for uri in [ASSIGN, UNASSIGN] {
        let resp = test::call_service(
            &app,
            post_json(uri, &auth, json!({ "userId": 0, "shipCode": "SHIP01" })),
        )
        .await;
        assert_error(resp, StatusCode::BAD_REQUEST, "Valid UserId is required.").await;

        let resp = test::call_service(
            &app,
            post_json(uri, &auth, json!({ "userId": 3, "shipCode": " " })),
        )
        .await;
        assert_error(resp, StatusCode::BAD_REQUEST, "ShipCode is required.").await;
    }

    let resp = test::call_service(&app, get("/api/usershipassignments/user/0", &auth)).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "Valid UserId is required.").await;

    let resp = test::call_service(&app, get("/api/usershipassignments/ship/%20", &auth)).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "ShipCode is required.").await;

    assert_eq!(fakes.assignments.len(), 0);
}

#[actix_web::test]
async fn store_failures_are_500_with_context() {
    let fakes = Fakes::failing();
    let (app, auth) = authed_app(&fakes).await;
    let key = json!({ "userId": 1, "shipCode": "SHIP01" });

    let cases = [
        (post_json(ASSIGN, &auth, key.clone()), "An error occurred while assigning ship to user."),
        (post_json(UNASSIGN, &auth, key), "An error occurred while unassigning ship from user."),
        (
            get("/api/usershipassignments", &auth),
            "An error occurred while retrieving user ship assignments.",
        ),
        (
            get("/api/usershipassignments/user/1", &auth),
            "An error occurred while retrieving assignments for user.",
        ),
        (
            get("/api/usershipassignments/ship/SHIP01", &auth),
            "An error occurred while retrieving assignments for ship.",
        ),
    ];
    for (req, message) in cases {
        let resp = test::call_service(&app, req).await;
        assert_error(resp, StatusCode::INTERNAL_SERVER_ERROR, message).await;
    }
}
