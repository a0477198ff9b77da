use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::models::{ApiResponse, ErrorCode, roles::requests::UpdateRoleRequest};
use crate::services::{bad_request, invalidate_principals, not_found, storage_error};
use crate::utils::validate::validate_text;

pub async fn update_role(
    service: &RoleService,
    role_id: i64,
    update: UpdateRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update.role_name
        && let Err(msg) = validate_text("角色名称", name, 1, 50)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;

    // 内置超级管理员角色不可停用
    if update.status == Some(false) {
        match storage.get_role_by_id(role_id).await {
            Ok(Some(role)) if role.is_protected() => {
                return Ok(bad_request(ErrorCode::RoleProtected, "内置角色不可停用"));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_error(e, ErrorCode::RoleNotFound, ErrorCode::Conflict, "更新角色失败")),
        }
    }

    let status_changed = update.status.is_some();
    match storage.update_role(role_id, update).await {
        Ok(Some(role)) => {
            if status_changed {
                invalidate_principals(request).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(role, "角色更新成功")))
        }
        Ok(None) => Ok(not_found(ErrorCode::RoleNotFound, "角色不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RoleNotFound,
            ErrorCode::RoleAlreadyExists,
            "更新角色失败",
        )),
    }
}
