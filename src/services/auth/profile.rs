use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::middlewares::require_jwt::principal_cache_key;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{ChangePasswordRequest, CurrentUser, ProfileResponse},
};
use crate::services::{bad_request, cache_from_request, current_user, internal_error};
use crate::storage::Storage;
use crate::utils::menu::menu_for;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password_simple;

use super::AuthService;

/// 组装资料：附带绑定的教师/学生档案
pub(crate) async fn build_profile(
    storage: &Arc<dyn Storage>,
    principal: CurrentUser,
) -> Result<ProfileResponse> {
    let teacher = storage.get_teacher_by_user_id(principal.id()).await?;
    let student = storage.get_student_by_user_id(principal.id()).await?;
    let is_super_admin = principal.is_super_admin();

    Ok(ProfileResponse {
        user: principal.user,
        roles: principal.roles,
        permissions: principal.permissions,
        is_super_admin,
        teacher: teacher.map(|t| t.teacher),
        student: student.map(|s| s.student),
    })
}

pub async fn handle_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    match build_profile(&storage, principal).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(ApiResponse::success(profile, "获取用户信息成功"))),
        Err(e) => Ok(internal_error("获取用户信息失败", e)),
    }
}

pub async fn handle_change_password(
    service: &AuthService,
    change: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    // 缓存中的主体不带密码哈希，重新读取
    let user = match storage.get_user_by_id(principal.id()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::UserNotFound, "用户不存在")));
        }
        Err(e) => return Ok(internal_error("修改密码失败", e)),
    };

    if !verify_password(&change.old_password, &user.password_hash) {
        return Ok(bad_request(ErrorCode::PasswordMismatch, "原密码不正确"));
    }
    if change.old_password == change.new_password {
        return Ok(bad_request(
            ErrorCode::UserPasswordInvalid,
            "新密码不能与原密码相同",
        ));
    }
    if let Err(msg) = validate_password_simple(&change.new_password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    let hash = match hash_password(&change.new_password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("密码哈希失败", e)),
    };

    match storage.update_password(user.id, &hash).await {
        Ok(_) => {
            if let Some(token) = RequireJWT::extract_access_token(request)
                && let Some(cache) = cache_from_request(request)
            {
                cache.remove(&principal_cache_key(&token)).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("密码修改成功")))
        }
        Err(e) => Ok(internal_error("修改密码失败", e)),
    }
}

pub async fn handle_menus(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(menu_for(&principal), "获取菜单成功")))
}
