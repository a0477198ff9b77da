use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::common::BatchDeleteRequest;
use crate::models::permissions::codes;
use crate::models::users::requests::{
    AssignRolesRequest, CreateUserRequest, ResetPasswordRequest, UpdateUserRequest,
    UserListParams,
};
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(user_id.0, &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(user_id.0, &req).await
}

pub async fn batch_delete_users(
    req: HttpRequest,
    batch: web::Json<BatchDeleteRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.batch_delete_users(batch.into_inner(), &req).await
}

pub async fn reset_password(
    req: HttpRequest,
    user_id: SafeIDI64,
    reset: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .reset_password(user_id.0, reset.into_inner(), &req)
        .await
}

pub async fn toggle_status(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.toggle_status(user_id.0, &req).await
}

pub async fn assign_roles(
    req: HttpRequest,
    user_id: SafeIDI64,
    assign: web::Json<AssignRolesRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .assign_roles(user_id.0, assign.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::USER_VIEW, codes::USER_MANAGE]);
    let create = || RequirePermission::any(&[codes::USER_CREATE, codes::USER_MANAGE]);
    let update = || {
        RequirePermission::any(&[codes::USER_UPDATE, codes::USER_EDIT, codes::USER_MANAGE])
    };
    let delete = || RequirePermission::any(&[codes::USER_DELETE, codes::USER_MANAGE]);

    cfg.service(
        web::scope("/api/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_users).wrap(view()))
                    .route(web::post().to(create_user).wrap(create())),
            )
            .service(
                web::resource("/batch-delete")
                    .route(web::post().to(batch_delete_users).wrap(delete())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_user).wrap(view()))
                    .route(web::put().to(update_user).wrap(update()))
                    .route(web::delete().to(delete_user).wrap(delete())),
            )
            .service(
                web::resource("/{id}/reset-password")
                    .route(web::put().to(reset_password).wrap(update())),
            )
            .service(
                web::resource("/{id}/toggle-status")
                    .route(web::put().to(toggle_status).wrap(update())),
            )
            .service(
                web::resource("/{id}/assign-roles").route(web::put().to(assign_roles).wrap(
                    RequirePermission::all(&[codes::USER_UPDATE, codes::ROLE_VIEW]),
                )),
            ),
    );
}
