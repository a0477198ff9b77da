#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::*;
use school_admin_next::models::classrooms::entities::{ClassroomStatus, ClassroomType};
use school_admin_next::models::classrooms::requests::CreateClassroomRequest;
use school_admin_next::models::reward_punishments::entities::RecordKind;
use school_admin_next::models::reward_punishments::requests::CreateRewardPunishmentRequest;
use school_admin_next::models::roles::entities::SUPER_ADMIN;
use school_admin_next::models::schedules::requests::CreateScheduleRequest;
use school_admin_next::utils::jwt::REFRESH_TOKEN_COOKIE;

#[actix_web::test]
async fn test_student_menus_only_show_personal_entries() {
    let storage = setup_storage().await;
    let dept = create_department(&storage, "CS").await;
    create_student(&storage, "stu01", dept.id).await;
    let app = init_app!(storage);

    let token = login!(app, "stu01", "10.0.1.1");
    let req = test::TestRequest::get()
        .uri("/api/auth/menus")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");

    let items = body["data"].as_array().unwrap();
    let titles: Vec<&str> = items.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["仪表盘", "选课中心", "成绩查询", "个人信息"]);

    // 管理分组带 children，学生一个都看不到
    assert!(items.iter().all(|m| m.get("children").is_none()));
    for item in items {
        if let Some(codes) = item["permissions"].as_array() {
            assert!(codes.iter().all(|c| c.as_str().unwrap().starts_with("MY_")));
        }
    }
}

#[actix_web::test]
async fn test_refresh_then_logout_expires_cookie() {
    let storage = setup_storage().await;
    create_user(&storage, "root", SUPER_ADMIN).await;
    let app = init_app!(storage);
    let ip = "10.0.1.2";

    let resp = login_response!(app, "root", ip);
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == REFRESH_TOKEN_COOKIE)
        .expect("refresh cookie")
        .into_owned();
    assert!(!cookie.value().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .insert_header(("X-Forwarded-For", ip))
        .cookie(cookie.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");
    let access_token = body["data"]["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(bearer(&access_token))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let expired = resp
        .response()
        .cookies()
        .find(|c| c.name() == REFRESH_TOKEN_COOKIE)
        .expect("expired cookie")
        .into_owned();
    assert_eq!(expired.value(), "");
    assert_eq!(
        expired.max_age(),
        Some(actix_web::cookie::time::Duration::seconds(0))
    );

    // 没有 cookie 时无法刷新
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .insert_header(("X-Forwarded-For", ip))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_schedule_views_and_conflict_check() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 30).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;
    create_user(&storage, "root", SUPER_ADMIN).await;

    let room = storage
        .create_classroom(CreateClassroomRequest {
            room_no: "301".to_string(),
            building: "三教".to_string(),
            floor: Some(3),
            capacity: 60,
            room_type: ClassroomType::Ordinary,
            equipment: Vec::new(),
            status: Some(ClassroomStatus::Available),
        })
        .await
        .unwrap();
    let schedule = storage
        .create_schedule(CreateScheduleRequest {
            offering_id: school.offering.id,
            classroom_id: room.id,
            day_of_week: 2,
            start_time: "08:00".to_string(),
            end_time: "09:40".to_string(),
            weeks: "1-16".to_string(),
        })
        .await
        .unwrap();
    storage
        .create_enrollment(alice.id, school.offering.id, true)
        .await
        .unwrap();
    storage
        .create_reward_punishment(
            CreateRewardPunishmentRequest {
                student_id: alice.id,
                kind: RecordKind::Reward,
                category: "奖学金".to_string(),
                description: None,
                occur_date: chrono::NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            },
            school.teacher.user_id,
        )
        .await
        .unwrap();

    let app = init_app!(storage);
    let token = login!(app, "root", "10.0.1.3");

    let req = test::TestRequest::post()
        .uri("/api/schedules/conflicts")
        .insert_header(bearer(&token))
        .set_json(json!({
            "classroom_id": room.id,
            "day_of_week": 2,
            "start_time": "09:00",
            "end_time": "10:40",
            "weeks": "3-5"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");
    assert_eq!(body["data"]["conflicts"], true);
    assert_eq!(body["data"]["details"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/schedules/conflicts")
        .insert_header(bearer(&token))
        .set_json(json!({
            "classroom_id": room.id,
            "day_of_week": 2,
            "start_time": "09:00",
            "end_time": "10:40",
            "weeks": "1-16",
            "exclude_schedule_id": schedule.id
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["conflicts"], false);
    assert!(body["data"]["details"].as_array().unwrap().is_empty());

    // 未给学期时取最新学期
    let req = test::TestRequest::get()
        .uri("/api/schedules/grid-view")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");
    assert_eq!(body["data"]["semester"], "2024-2025-1");
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], schedule.id);
    assert_eq!(items[0]["day_name"], "周二");
    assert_eq!(items[0]["has_conflict"], false);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/schedules/grid-view?semester=2024-2025-1&classroom_id={}",
            room.id + 1
        ))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"]["items"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/schedules/by-student/{}", alice.id))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0, "{body}");
    assert_eq!(body["data"][0]["course_code"], "CS101");

    let req = test::TestRequest::get()
        .uri("/api/schedules/by-student/99999")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/reward-punishments/categories/list")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"], json!(["奖学金"]));
}

#[actix_web::test]
async fn test_user_delete_refuses_profiles_with_history() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 30).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;
    let bob = create_student(&storage, "bob", school.dept.id).await;
    create_user(&storage, "root", SUPER_ADMIN).await;
    storage
        .create_enrollment(alice.id, school.offering.id, true)
        .await
        .unwrap();

    let app = init_app!(storage);
    let token = login!(app, "root", "10.0.1.4");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", alice.user_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", school.teacher.user_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // 冲突的 id 跳过，其余继续删除
    let req = test::TestRequest::post()
        .uri("/api/users/batch-delete")
        .insert_header(bearer(&token))
        .set_json(json!({ "ids": [alice.user_id, bob.user_id, school.teacher.user_id] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["deleted"], 1);
    let mut skipped: Vec<i64> = body["data"]["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    skipped.sort_unstable();
    let mut expected = vec![alice.user_id, school.teacher.user_id];
    expected.sort_unstable();
    assert_eq!(skipped, expected);

    assert!(storage.get_user_by_id(bob.user_id).await.unwrap().is_none());
    let offering = storage
        .get_offering_by_id(school.offering.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(offering.current_students, 1);
}
