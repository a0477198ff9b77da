use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::models::{ApiResponse, ErrorCode, roles::requests::AssignPermissionsRequest};
use crate::services::{internal_error, invalidate_principals, not_found, reference_error};

pub async fn get_role_permissions(
    service: &RoleService,
    role_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_role_by_id(role_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::RoleNotFound, "角色不存在")),
        Err(e) => return Ok(internal_error("获取角色权限失败", e)),
    }

    match storage.get_role_permissions(role_id).await {
        Ok(perms) => Ok(HttpResponse::Ok().json(ApiResponse::success(perms, "获取角色权限成功"))),
        Err(e) => Ok(internal_error("获取角色权限失败", e)),
    }
}

/// 整体替换角色权限，之后所有已缓存的认证主体失效
pub async fn assign_permissions(
    service: &RoleService,
    role_id: i64,
    assign: AssignPermissionsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.set_role_permissions(role_id, assign.permission_ids).await {
        Ok(()) => {
            invalidate_principals(request).await;
            match storage.get_role_detail(role_id).await {
                Ok(Some(detail)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "权限分配成功")))
                }
                Ok(None) => Ok(not_found(ErrorCode::RoleNotFound, "角色不存在")),
                Err(e) => Ok(internal_error("权限分配后读取角色失败", e)),
            }
        }
        Err(e) => Ok(reference_error(
            e,
            &[("角色", ErrorCode::RoleNotFound), ("部分权限", ErrorCode::PermissionNotFound)],
            ErrorCode::Conflict,
            "分配权限失败",
        )),
    }
}
