use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, not_found};

pub async fn get_role(
    service: &RoleService,
    role_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_role_detail(role_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取角色成功"))),
        Ok(None) => Ok(not_found(ErrorCode::RoleNotFound, "角色不存在")),
        Err(e) => Ok(internal_error("获取角色失败", e)),
    }
}
