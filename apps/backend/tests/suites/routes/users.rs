use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::{json, Value};

use super::{authed_app, delete, get, post_json, put_json};
use crate::common::assert_error;
use crate::support::fakes::STORE_DOWN;
use crate::support::Fakes;

fn seeded() -> Fakes {
    let fakes = Fakes::default();
    fakes.users.insert(1, "Maria Papadopoulou", "Admin");
    fakes.users.insert(2, "Jonas Berg", "User");
    fakes
}

#[actix_web::test]
async fn list_and_get() {
    let fakes = seeded();
    let (app, auth) = authed_app(&fakes).await;

    let body: Value = test::call_and_read_body_json(&app, get("/api/users", &auth)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0], json!({ "userId": 1, "name": "Maria Papadopoulou", "role": "Admin" }));

    let body: Value = test::call_and_read_body_json(&app, get("/api/users/2", &auth)).await;
    assert_eq!(body["name"], "Jonas Berg");

    let resp = test::call_service(&app, get("/api/users/99", &auth)).await;
    assert_error(resp, StatusCode::NOT_FOUND, "User with ID 99 not found.").await;
}

#[actix_web::test]
async fn create_assigns_an_id() {
    let fakes = seeded();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(
        &app,
        post_json("/api/users", &auth, json!({ "name": "Ana Silva", "role": "Manager" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/users/3");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "userId": 3, "name": "Ana Silva", "role": "Manager" }));
    assert_eq!(fakes.users.get(3).unwrap().name, "Ana Silva");
}

#[actix_web::test]
async fn create_requires_name_then_role() {
    let fakes = Fakes::default();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(&app, post_json("/api/users", &auth, json!({ "role": "User" }))).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "User name is required.").await;

    let resp = test::call_service(
        &app,
        post_json("/api/users", &auth, json!({ "name": "Ana", "role": "" })),
    )
    .await;
    assert_error(resp, StatusCode::BAD_REQUEST, "User role is required.").await;
}

#[actix_web::test]
async fn update_checks_id_and_existence() {
    let fakes = seeded();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(
        &app,
        put_json("/api/users/1", &auth, json!({ "userId": 2, "name": "X", "role": "User" })),
    )
    .await;
    assert_error(resp, StatusCode::BAD_REQUEST, "User ID mismatch.").await;

    let resp = test::call_service(
        &app,
        put_json("/api/users/50", &auth, json!({ "userId": 50, "name": "X", "role": "User" })),
    )
    .await;
    assert_error(resp, StatusCode::NOT_FOUND, "User with ID 50 not found.").await;

    let resp = test::call_service(
        &app,
        put_json("/api/users/2", &auth, json!({ "userId": 2, "name": "Jonas Berg", "role": "Manager" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(fakes.users.get(2).unwrap().role, "Manager");
}

#[actix_web::test]
async fn delete_answers_204_then_404() {
    let fakes = seeded();
    let (app, auth) = authed_app(&fakes).await;

    let resp = test::call_service(&app, delete("/api/users/2", &auth)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete("/api/users/2", &auth)).await;
    assert_error(resp, StatusCode::NOT_FOUND, "User with ID 2 not found.").await;
}

#[actix_web::test]
async fn store_failures_are_500_with_context() {
    let fakes = Fakes::failing();
    let (app, auth) = authed_app(&fakes).await;

    let cases = [
        (get("/api/users", &auth), "An error occurred while retrieving users."),
        (get("/api/users/1", &auth), "An error occurred while retrieving the user."),
        (
            post_json("/api/users", &auth, json!({ "name": "A", "role": "User" })),
            "An error occurred while creating the user.",
        ),
        (
            put_json("/api/users/1", &auth, json!({ "userId": 1, "name": "A", "role": "User" })),
            "An error occurred while updating the user.",
        ),
        (delete("/api/users/1", &auth), "An error occurred while deleting the user."),
    ];

    for (req, message) in cases {
        let resp = test::call_service(&app, req).await;
        let body = assert_error(resp, StatusCode::INTERNAL_SERVER_ERROR, message).await;
        assert_eq!(body.error.as_deref(), Some(STORE_DOWN));
    }
}
