//! 业务服务层
//!
//! 每个资源一个服务，路由层通过懒加载的全局实例调用。
//! 服务从请求的 app data 中取得 `Arc<dyn Storage>`，返回统一响应体。

use actix_web::{
    HttpRequest, HttpResponse, Result as ActixResult, error::InternalError, http::StatusCode,
    web,
};
use std::sync::Arc;
use tracing::error;

use crate::cache::ObjectCache;
use crate::errors::SchoolSystemError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, auth::CurrentUser};
use crate::storage::Storage;

/// 生成服务结构体：可注入存储（测试），否则从请求中获取
macro_rules! define_service {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            storage: Option<std::sync::Arc<dyn $crate::storage::Storage>>,
        }

        impl $name {
            pub fn new_lazy() -> Self {
                Self { storage: None }
            }

            pub fn with_storage(storage: std::sync::Arc<dyn $crate::storage::Storage>) -> Self {
                Self {
                    storage: Some(storage),
                }
            }

            pub(crate) fn get_storage(
                &self,
                request: &actix_web::HttpRequest,
            ) -> actix_web::Result<std::sync::Arc<dyn $crate::storage::Storage>> {
                match &self.storage {
                    Some(storage) => Ok(storage.clone()),
                    None => $crate::services::storage_from_request(request),
                }
            }
        }
    };
}

pub mod auth;
pub mod classrooms;
pub mod course_offerings;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod grades;
pub mod permissions;
pub mod reward_punishments;
pub mod roles;
pub mod schedules;
pub mod statistics;
pub mod student_status;
pub mod students;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use course_offerings::OfferingService;
pub use courses::CourseService;
pub use departments::DepartmentService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use permissions::PermissionService;
pub use reward_punishments::RewardPunishmentService;
pub use roles::RoleService;
pub use schedules::ScheduleService;
pub use statistics::StatisticsService;
pub use student_status::StudentStatusService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use users::UserService;

/// 带统一响应体的 actix 错误，用于在 `?` 处直接结束请求
pub(crate) fn envelope_error(status: StatusCode, code: ErrorCode, message: &str) -> actix_web::Error {
    let response = HttpResponse::build(status).json(ApiResponse::error_empty(code, message));
    InternalError::from_response(message.to_string(), response).into()
}

pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            envelope_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                "存储未初始化",
            )
        })
}

pub(crate) fn cache_from_request(request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
}

/// 角色或权限变更后清空认证主体缓存，使新授权立即生效
pub(crate) async fn invalidate_principals(request: &HttpRequest) {
    if let Some(cache) = cache_from_request(request) {
        cache.invalidate_all().await;
    }
}

/// 当前用户；只在 RequireJWT 保护的路由中调用
pub(crate) fn current_user(request: &HttpRequest) -> ActixResult<CurrentUser> {
    RequireJWT::extract_current_user(request).ok_or_else(|| {
        envelope_error(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "需要登录")
    })
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, message))
}

pub(crate) fn internal_error(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    error!("{context}: {err}");
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {err}"),
    ))
}

/// 把存储层错误映射为 HTTP 响应
///
/// 校验失败 400，引用缺失 404，业务冲突 409，其余 500。
pub(crate) fn storage_error(
    err: SchoolSystemError,
    not_found_code: ErrorCode,
    conflict_code: ErrorCode,
    context: &str,
) -> HttpResponse {
    match err {
        SchoolSystemError::Validation(msg) => bad_request(ErrorCode::ValidationFailed, msg),
        SchoolSystemError::NotFound(msg) => not_found(not_found_code, msg),
        SchoolSystemError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(conflict_code, msg))
        }
        SchoolSystemError::Authorization(msg) => forbidden(msg),
        other => internal_error(context, other),
    }
}

/// 引用多种对象时，按缺失对象的名称挑选错误码
pub(crate) fn reference_error(
    err: SchoolSystemError,
    codes: &[(&str, ErrorCode)],
    conflict_code: ErrorCode,
    context: &str,
) -> HttpResponse {
    let not_found_code = match &err {
        SchoolSystemError::NotFound(msg) => codes
            .iter()
            .find(|(prefix, _)| msg.starts_with(prefix))
            .map(|(_, code)| *code)
            .unwrap_or(ErrorCode::NotFound),
        _ => ErrorCode::NotFound,
    };
    storage_error(err, not_found_code, conflict_code, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_status() {
        let cases = [
            (SchoolSystemError::validation("x"), StatusCode::BAD_REQUEST),
            (SchoolSystemError::not_found("x"), StatusCode::NOT_FOUND),
            (SchoolSystemError::conflict("x"), StatusCode::CONFLICT),
            (SchoolSystemError::authorization("x"), StatusCode::FORBIDDEN),
            (
                SchoolSystemError::database_operation("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let resp = storage_error(err, ErrorCode::NotFound, ErrorCode::Conflict, "测试");
            assert_eq!(resp.status(), status);
        }
    }

    #[actix_web::test]
    async fn test_reference_error_picks_code() {
        let resp = reference_error(
            SchoolSystemError::not_found("部门 3 不存在"),
            &[("用户", ErrorCode::UserNotFound), ("部门", ErrorCode::DepartmentNotFound)],
            ErrorCode::Conflict,
            "测试",
        );
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], ErrorCode::DepartmentNotFound as i32);
    }
}
