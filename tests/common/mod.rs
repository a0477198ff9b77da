#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use school_admin_next::models::course_offerings::entities::CourseOffering;
use school_admin_next::models::course_offerings::requests::CreateOfferingRequest;
use school_admin_next::models::courses::entities::{Course, CourseType};
use school_admin_next::models::courses::requests::CreateCourseRequest;
use school_admin_next::models::departments::entities::Department;
use school_admin_next::models::departments::requests::CreateDepartmentRequest;
use school_admin_next::models::students::entities::Student;
use school_admin_next::models::students::requests::CreateStudentRequest;
use school_admin_next::models::teachers::entities::Teacher;
use school_admin_next::models::teachers::requests::CreateTeacherRequest;
use school_admin_next::models::users::entities::User;
use school_admin_next::models::users::requests::CreateUserRequest;
use school_admin_next::runtime::lifetime::startup::seed_catalog;
use school_admin_next::storage::Storage;
use school_admin_next::storage::sea_orm_storage::SeaOrmStorage;
use school_admin_next::utils::password::hash_password;

pub const PASSWORD: &str = "Passw0rd123";

/// 与 main 中相同的路由与错误处理，注入给定的存储
macro_rules! init_app {
    ($storage:expr) => {{
        let cache: ::std::sync::Arc<dyn ::school_admin_next::cache::ObjectCache> =
            ::std::sync::Arc::new(
                ::school_admin_next::cache::object_cache::moka::MokaCacheWrapper::with_settings(
                    1000, 300,
                ),
            );
        let storage: ::std::sync::Arc<dyn ::school_admin_next::storage::Storage> =
            $storage.clone();
        ::actix_web::test::init_service(
            ::actix_web::App::new()
                .app_data(::actix_web::web::Data::new(storage))
                .app_data(::actix_web::web::Data::new(cache))
                .app_data(
                    ::actix_web::web::QueryConfig::default()
                        .error_handler(::school_admin_next::utils::query_error_handler),
                )
                .app_data(
                    ::actix_web::web::JsonConfig::default()
                        .error_handler(::school_admin_next::utils::json_error_handler),
                )
                .configure(::school_admin_next::routes::configure_api_routes),
        )
        .await
    }};
}

/// 登录并返回 access token；登录限流按客户端 IP 计数，可指定来源 IP
macro_rules! login {
    ($app:expr, $username:expr) => {
        login!($app, $username, "127.0.0.1")
    };
    ($app:expr, $username:expr, $ip:expr) => {{
        let resp = login_response!($app, $username, $ip);
        let body: ::serde_json::Value = ::actix_web::test::read_body_json(resp).await;
        assert_eq!(body["code"], 0, "login failed: {body}");
        body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}

macro_rules! login_response {
    ($app:expr, $username:expr, $ip:expr) => {{
        let req = ::actix_web::test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("X-Forwarded-For", $ip))
            .set_json(::serde_json::json!({ "username": $username, "password": crate::common::PASSWORD }))
            .to_request();
        ::actix_web::test::call_service(&$app, req).await
    }};
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// 内存数据库，已迁移并写入权限目录与内置角色
pub async fn setup_storage() -> Arc<dyn Storage> {
    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::connect("sqlite::memory:")
            .await
            .expect("connect in-memory sqlite"),
    );
    seed_catalog(&storage).await.expect("seed catalog");
    storage
}

pub async fn role_id(storage: &Arc<dyn Storage>, code: &str) -> i64 {
    storage
        .get_role_by_code(code)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("role {code} should be seeded"))
        .id
}

pub async fn create_user(storage: &Arc<dyn Storage>, username: &str, role_code: &str) -> User {
    let role = role_id(storage, role_code).await;
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            password: hash_password(PASSWORD).unwrap(),
            real_name: format!("{username} 同学"),
            phone: None,
            status: None,
            role_ids: vec![role],
        })
        .await
        .unwrap()
}

pub async fn create_department(storage: &Arc<dyn Storage>, code: &str) -> Department {
    storage
        .create_department(CreateDepartmentRequest {
            dept_name: format!("{code} 学院"),
            dept_code: code.to_string(),
            parent_id: None,
            description: None,
            status: None,
        })
        .await
        .unwrap()
}

pub async fn create_teacher(storage: &Arc<dyn Storage>, username: &str, dept_id: i64) -> Teacher {
    let user = create_user(storage, username, "TEACHER").await;
    storage
        .create_teacher(CreateTeacherRequest {
            user_id: user.id,
            teacher_no: format!("T{}", user.id + 1000),
            dept_id: Some(dept_id),
            title: Some("讲师".to_string()),
            hire_date: None,
            status: None,
        })
        .await
        .unwrap()
}

pub async fn create_student(storage: &Arc<dyn Storage>, username: &str, dept_id: i64) -> Student {
    let user = create_user(storage, username, "STUDENT").await;
    storage
        .create_student(CreateStudentRequest {
            user_id: user.id,
            student_no: format!("2024{:04}", user.id),
            dept_id: Some(dept_id),
            class_name: Some("计科 2401".to_string()),
            grade: Some(2024),
            enrollment_year: Some(2024),
            graduation_year: Some(2028),
        })
        .await
        .unwrap()
}

pub async fn create_course(
    storage: &Arc<dyn Storage>,
    code: &str,
    credits: f64,
    dept_id: i64,
) -> Course {
    storage
        .create_course(CreateCourseRequest {
            course_code: code.to_string(),
            course_name: format!("课程 {code}"),
            dept_id: Some(dept_id),
            credits,
            hours: 48,
            course_type: CourseType::Required,
            description: None,
            status: None,
        })
        .await
        .unwrap()
}

pub async fn create_offering(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    teacher_id: i64,
    max_students: i32,
) -> CourseOffering {
    storage
        .create_offering(CreateOfferingRequest {
            course_id,
            teacher_id,
            semester: "2024-2025-1".to_string(),
            max_students: Some(max_students),
            status: Some(true),
        })
        .await
        .unwrap()
}

/// 一个学院、一名教师、一门开课
pub struct School {
    pub dept: Department,
    pub teacher: Teacher,
    pub course: Course,
    pub offering: CourseOffering,
}

pub async fn setup_school(storage: &Arc<dyn Storage>, max_students: i32) -> School {
    let dept = create_department(storage, "CS").await;
    let teacher = create_teacher(storage, "teacher01", dept.id).await;
    let course = create_course(storage, "CS101", 3.0, dept.id).await;
    let offering = create_offering(storage, course.id, teacher.id, max_students).await;
    School {
        dept,
        teacher,
        course,
        offering,
    }
}
