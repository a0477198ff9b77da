use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::UserService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    ApiResponse, ErrorCode, common::BatchDeleteRequest, users::responses::BatchDeleteResponse,
};
use crate::services::{
    bad_request, current_user, internal_error, invalidate_principals, not_found, storage_error,
};
use crate::storage::Storage;

/// 删除结果
enum Removal {
    Deleted,
    Missing,
    Protected,
}

// 当前用户与内置管理员不可删除
async fn remove_user(storage: &Arc<dyn Storage>, user_id: i64, current_id: i64) -> Result<Removal> {
    if user_id == current_id {
        return Ok(Removal::Protected);
    }
    match storage.get_user_by_id(user_id).await? {
        None => Ok(Removal::Missing),
        Some(user) if user.is_builtin_admin() => Ok(Removal::Protected),
        Some(_) => Ok(if storage.delete_user(user_id).await? {
            Removal::Deleted
        } else {
            Removal::Missing
        }),
    }
}

pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current = current_user(request)?;
    let storage = service.get_storage(request)?;

    match remove_user(&storage, user_id, current.id()).await {
        Ok(Removal::Deleted) => {
            invalidate_principals(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("用户删除成功")))
        }
        Ok(Removal::Missing) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Ok(Removal::Protected) => Ok(bad_request(
            ErrorCode::CanNotDeleteCurrentUser,
            "不能删除当前登录用户或内置管理员",
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::UserNotFound,
            ErrorCode::Conflict,
            "删除用户失败",
        )),
    }
}

pub async fn batch_delete_users(
    service: &UserService,
    batch: BatchDeleteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if batch.ids.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "ids 不能为空"));
    }
    let current = current_user(request)?;
    let storage = service.get_storage(request)?;

    let mut ids = batch.ids;
    ids.sort_unstable();
    ids.dedup();

    let mut result = BatchDeleteResponse {
        deleted: 0,
        skipped: Vec::new(),
    };
    for id in ids {
        match remove_user(&storage, id, current.id()).await {
            Ok(Removal::Deleted) => result.deleted += 1,
            Ok(_) | Err(SchoolSystemError::Conflict(_)) => result.skipped.push(id),
            Err(e) => {
                // 已删除的用户仍需让缓存失效
                if result.deleted > 0 {
                    invalidate_principals(request).await;
                }
                return Ok(internal_error("批量删除用户失败", e));
            }
        }
    }

    if result.deleted > 0 {
        invalidate_principals(request).await;
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(result, "批量删除完成")))
}
