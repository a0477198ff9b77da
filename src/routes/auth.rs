use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::{ChangePasswordRequest, LoginRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn refresh_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&req).await
}

pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&req).await
}

pub async fn change_password(
    req: HttpRequest,
    change: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.change_password(change.into_inner(), &req).await
}

pub async fn menus(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.menus(&req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/login", web::post().to(login).wrap(RateLimit::login()))
            .route(
                "/refresh",
                web::post().to(refresh_token).wrap(RateLimit::refresh_token()),
            )
            .route("/logout", web::post().to(logout))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/profile", web::get().to(profile))
                    .route("/change-password", web::post().to(change_password))
                    .route("/menus", web::get().to(menus)),
            ),
    );
}
