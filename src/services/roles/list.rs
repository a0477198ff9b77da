use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoleService;
use crate::models::{ApiResponse, roles::requests::RoleListParams};
use crate::services::internal_error;

pub async fn list_roles(
    service: &RoleService,
    query: RoleListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_roles_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取角色列表成功"))),
        Err(e) => Ok(internal_error("获取角色列表失败", e)),
    }
}

pub async fn list_all_roles(
    service: &RoleService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_roles().await {
        Ok(roles) => Ok(HttpResponse::Ok().json(ApiResponse::success(roles, "获取角色列表成功"))),
        Err(e) => Ok(internal_error("获取角色列表失败", e)),
    }
}
