use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::roles::requests::{
    AssignPermissionsRequest, CreateRoleRequest, RoleListParams, UpdateRoleRequest,
};
use crate::services::RoleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 RoleService 实例
static ROLE_SERVICE: Lazy<RoleService> = Lazy::new(RoleService::new_lazy);

pub async fn list_roles(
    req: HttpRequest,
    query: web::Query<RoleListParams>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.list_roles(query.into_inner(), &req).await
}

pub async fn list_all_roles(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.list_all_roles(&req).await
}

pub async fn create_role(
    req: HttpRequest,
    role: web::Json<CreateRoleRequest>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.create_role(role.into_inner(), &req).await
}

pub async fn get_role(req: HttpRequest, role_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.get_role(role_id.0, &req).await
}

pub async fn update_role(
    req: HttpRequest,
    role_id: SafeIDI64,
    update: web::Json<UpdateRoleRequest>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE
        .update_role(role_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_role(req: HttpRequest, role_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.delete_role(role_id.0, &req).await
}

pub async fn get_role_permissions(
    req: HttpRequest,
    role_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE.get_role_permissions(role_id.0, &req).await
}

pub async fn assign_permissions(
    req: HttpRequest,
    role_id: SafeIDI64,
    assign: web::Json<AssignPermissionsRequest>,
) -> ActixResult<HttpResponse> {
    ROLE_SERVICE
        .assign_permissions(role_id.0, assign.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::ROLE_VIEW, codes::ROLE_MANAGE]);
    let create = || RequirePermission::any(&[codes::ROLE_CREATE, codes::ROLE_MANAGE]);
    let update = || {
        RequirePermission::any(&[codes::ROLE_UPDATE, codes::ROLE_EDIT, codes::ROLE_MANAGE])
    };
    let delete = || RequirePermission::any(&[codes::ROLE_DELETE, codes::ROLE_MANAGE]);

    cfg.service(
        web::scope("/api/roles")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_roles).wrap(view()))
                    .route(web::post().to(create_role).wrap(create())),
            )
            .service(web::resource("/all").route(web::get().to(list_all_roles).wrap(view())))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_role).wrap(view()))
                    .route(web::put().to(update_role).wrap(update()))
                    .route(web::delete().to(delete_role).wrap(delete())),
            )
            .service(
                web::resource("/{id}/permissions")
                    .route(web::get().to(get_role_permissions).wrap(view())),
            )
            .service(
                web::resource("/{id}/assign-permissions")
                    .route(web::put().to(assign_permissions).wrap(update())),
            ),
    );
}
