#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::*;
use school_admin_next::models::roles::entities::SUPER_ADMIN;

#[actix_web::test]
async fn test_requests_without_token_are_rejected() {
    let storage = setup_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_login_and_profile() {
    let storage = setup_storage().await;
    create_user(&storage, "root", SUPER_ADMIN).await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "root", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login!(app, "root");

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["username"], "root");
    assert_eq!(body["data"]["is_super_admin"], true);

    let req = test::TestRequest::get()
        .uri("/api/users?page=1&size=10")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/users/abc")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_student_enrollment_flow() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 30).await;
    create_student(&storage, "stu01", school.dept.id).await;
    create_user(&storage, "root", SUPER_ADMIN).await;
    let app = init_app!(storage);

    let student_token = login!(app, "stu01");

    // 学生没有用户管理权限
    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(bearer(&student_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(bearer(&student_token))
        .set_json(json!({ "offering_id": school.offering.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "pending");
    let enrollment_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(bearer(&student_token))
        .set_json(json!({ "offering_id": school.offering.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let admin_token = login!(app, "root");
    let req = test::TestRequest::post()
        .uri(&format!("/api/enrollments/{enrollment_id}/approve"))
        .insert_header(bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "approved");

    let req = test::TestRequest::get()
        .uri("/api/enrollments/my-enrollments")
        .insert_header(bearer(&student_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");
}

#[actix_web::test]
async fn test_service_with_injected_storage() {
    use school_admin_next::services::PermissionService;

    let storage = setup_storage().await;
    let service = PermissionService::with_storage(storage);
    let req = test::TestRequest::default().to_http_request();

    let resp = service.list_by_module(&req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let groups = body["data"].as_array().unwrap();
    assert!(!groups.is_empty());
    assert_eq!(groups[0]["module"], "user");
}
