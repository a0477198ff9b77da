use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_user_with_roles(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "获取用户成功"))),
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => Ok(internal_error("获取用户失败", e)),
    }
}
