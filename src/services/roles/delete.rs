use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoleService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_role(
    service: &RoleService,
    role_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_role(role_id).await {
        Ok(true) => {
            info!("删除角色 {}", role_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("角色删除成功")))
        }
        Ok(false) => Ok(not_found(ErrorCode::RoleNotFound, "角色不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RoleNotFound,
            ErrorCode::RoleInUse,
            "删除角色失败",
        )),
    }
}
