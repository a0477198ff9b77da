use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, users::requests::UserListParams};
use crate::services::internal_error;

pub async fn list_users(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_users_with_pagination(query.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取用户列表成功"))),
        Err(e) => Ok(internal_error("获取用户列表失败", e)),
    }
}
