use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::permissions::requests::PermissionListParams;
use crate::services::PermissionService;

// 懒加载的全局 PermissionService 实例
static PERMISSION_SERVICE: Lazy<PermissionService> = Lazy::new(PermissionService::new_lazy);

pub async fn list_permissions(
    req: HttpRequest,
    query: web::Query<PermissionListParams>,
) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE
        .list_permissions(query.into_inner(), &req)
        .await
}

pub async fn list_all_permissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE.list_all_permissions(&req).await
}

pub async fn list_by_module(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE.list_by_module(&req).await
}

pub async fn list_modules() -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE.list_modules().await
}

// 配置路由
pub fn configure_permission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/permissions")
            .wrap(RequirePermission::any(&[codes::ROLE_VIEW, codes::ROLE_MANAGE]))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_permissions))
            .route("/all", web::get().to(list_all_permissions))
            .route("/by-module", web::get().to(list_by_module))
            .route("/modules", web::get().to(list_modules)),
    );
}
