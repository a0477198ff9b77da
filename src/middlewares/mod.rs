pub mod rate_limit;
pub mod require_jwt;
pub mod require_permission;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::{ApiResponse, ErrorCode};

pub use rate_limit::RateLimit;
pub use require_jwt::RequireJWT;
pub use require_permission::RequirePermission;

/// 中间件拒绝请求时的统一响应
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ApiResponse::error_empty(code, message))
}
