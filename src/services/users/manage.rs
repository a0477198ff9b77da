use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::UserStatus,
        requests::{AssignRolesRequest, ResetPasswordRequest, UpdateUserRequest},
    },
};
use crate::services::{
    bad_request, current_user, internal_error, invalidate_principals, not_found, storage_error,
};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn reset_password(
    service: &UserService,
    user_id: i64,
    reset: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_password_simple(&reset.new_password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }
    let hash = match hash_password(&reset.new_password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("密码哈希失败", e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_password(user_id, &hash).await {
        Ok(true) => {
            info!("重置用户 {} 的密码", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("密码重置成功")))
        }
        Ok(false) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => Ok(internal_error("重置密码失败", e)),
    }
}

/// 启用 <-> 禁用；锁定状态切换为启用
pub async fn toggle_status(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current = current_user(request)?;
    let storage = service.get_storage(request)?;

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => return Ok(internal_error("切换用户状态失败", e)),
    };

    let next = match user.status {
        UserStatus::Active => UserStatus::Inactive,
        UserStatus::Inactive | UserStatus::Locked => UserStatus::Active,
    };
    if next != UserStatus::Active && (user.id == current.id() || user.is_builtin_admin()) {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "不能禁用当前登录用户或内置管理员",
        ));
    }

    let update = UpdateUserRequest {
        status: Some(next),
        ..Default::default()
    };
    match storage.update_user(user_id, update).await {
        Ok(Some(user)) => {
            invalidate_principals(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "用户状态已更新")))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => Ok(internal_error("切换用户状态失败", e)),
    }
}

pub async fn assign_roles(
    service: &UserService,
    user_id: i64,
    assign: AssignRolesRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.set_user_roles(user_id, assign.role_ids).await {
        Ok(()) => {
            invalidate_principals(request).await;
            match storage.get_user_with_roles(user_id).await {
                Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "角色分配成功"))),
                Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
                Err(e) => Ok(internal_error("角色分配后读取用户失败", e)),
            }
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RoleNotFound,
            ErrorCode::Conflict,
            "分配角色失败",
        )),
    }
}
