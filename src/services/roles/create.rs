use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoleService;
use crate::models::{ApiResponse, ErrorCode, roles::requests::CreateRoleRequest};
use crate::services::{bad_request, storage_error};
use crate::utils::validate::{validate_role_code, validate_text};

pub async fn create_role(
    service: &RoleService,
    mut role: CreateRoleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    role.role_code = role.role_code.trim().to_string();
    if let Err(msg) = validate_role_code(&role.role_code) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = validate_text("角色名称", &role.role_name, 1, 50) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_role(role).await {
        Ok(role) => {
            info!("创建角色 {} ({})", role.role_code, role.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(role, "角色创建成功")))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::PermissionNotFound,
            ErrorCode::RoleAlreadyExists,
            "创建角色失败",
        )),
    }
}
