use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use super::create::check_profile_fields;
use crate::models::{ApiResponse, ErrorCode, users::requests::UpdateUserRequest};
use crate::services::{bad_request, invalidate_principals, not_found, storage_error};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err((code, msg)) = check_profile_fields(
        update_data.email.as_deref(),
        update_data.real_name.as_deref(),
        update_data.phone.as_deref(),
    ) {
        return Ok(bad_request(code, msg));
    }

    let storage = service.get_storage(request)?;
    let touches_authority = update_data.status.is_some() || update_data.role_ids.is_some();

    match storage.update_user(user_id, update_data).await {
        Ok(Some(_)) => {
            if touches_authority {
                invalidate_principals(request).await;
            }
            match storage.get_user_with_roles(user_id).await {
                Ok(Some(user)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "用户更新成功")))
                }
                _ => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("用户更新成功"))),
            }
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "用户不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RoleNotFound,
            ErrorCode::UserAlreadyExists,
            "更新用户失败",
        )),
    }
}
