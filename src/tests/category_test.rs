use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{json, Value};

use super::{bearer_for, test_state};
use crate::models::category::CategoryResponse;
use crate::models::IdResponse;

#[actix_web::test]
async fn test_category_round_trip() {
    let state = test_state();
    let app = test_app!(state);
    let auth = bearer_for(&state, "alice@example.com").await;

    let req = TestRequest::post()
        .uri("/category/create")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"name": "Bills"}))
        .to_request();
    let created: CategoryResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.name, "Bills");

    let req = TestRequest::get()
        .uri("/category/all")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let all: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all, vec![created.clone()]);

    let req = TestRequest::put()
        .uri(&format!("/category/update/{}", created.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"name": "Utilities"}))
        .to_request();
    let updated: IdResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.id, created.id);

    let req = TestRequest::get()
        .uri("/category/all")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let all: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Utilities");

    let req = TestRequest::delete()
        .uri(&format!("/category/delete/{}", created.id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let deleted: IdResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted.id, created.id);

    let req = TestRequest::get()
        .uri("/category/all")
        .insert_header(("Authorization", auth))
        .to_request();
    let all: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());
}

#[actix_web::test]
async fn test_categories_are_isolated_between_users() {
    let state = test_state();
    let app = test_app!(state);
    let alice = bearer_for(&state, "alice@example.com").await;
    let mallory = bearer_for(&state, "mallory@example.com").await;

    let req = TestRequest::post()
        .uri("/category/create")
        .insert_header(("Authorization", alice.clone()))
        .set_json(json!({"name": "Bank"}))
        .to_request();
    let created: CategoryResponse = test::call_and_read_body_json(&app, req).await;

    let req = TestRequest::get()
        .uri("/category/all")
        .insert_header(("Authorization", mallory.clone()))
        .to_request();
    let all: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());

    // Foreign update and delete succeed as no-ops.
    let req = TestRequest::put()
        .uri(&format!("/category/update/{}", created.id))
        .insert_header(("Authorization", mallory.clone()))
        .set_json(json!({"name": "Pwned"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: IdResponse = test::read_body_json(res).await;
    assert_eq!(body.id, created.id);

    let req = TestRequest::delete()
        .uri(&format!("/category/delete/{}", created.id))
        .insert_header(("Authorization", mallory))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/category/all")
        .insert_header(("Authorization", alice))
        .to_request();
    let all: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all, vec![created]);
}

#[actix_web::test]
async fn test_update_missing_category_is_noop() {
    let state = test_state();
    let app = test_app!(state);
    let auth = bearer_for(&state, "alice@example.com").await;

    let req = TestRequest::put()
        .uri("/category/update/9999")
        .insert_header(("Authorization", auth))
        .set_json(json!({"name": "Ghost"}))
        .to_request();
    let body: IdResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.id, 9999);
}

#[actix_web::test]
async fn test_category_bad_input() {
    let state = test_state();
    let app = test_app!(state);
    let auth = bearer_for(&state, "alice@example.com").await;

    let req = TestRequest::put()
        .uri("/category/update/not-a-number")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"name": "x"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/category/create")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"title": "missing name"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("name"));

    let req = TestRequest::post()
        .uri("/category/create")
        .insert_header(("Authorization", auth))
        .set_json(json!({"name": ""}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
