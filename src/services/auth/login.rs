use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::middlewares::require_jwt::{load_principal, principal_cache_key};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::services::{cache_from_request, internal_error};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;
use super::profile::build_profile;

fn auth_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "用户名或密码错误",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let user = match storage
        .get_user_by_username_or_email(login_request.username.trim())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(auth_failed()),
        Err(e) => return Ok(internal_error("登录失败", e)),
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        warn!("用户 {} 密码错误", user.username);
        return Ok(auth_failed());
    }

    if !user.is_active() {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::UserDisabled,
            "账号已被禁用或锁定",
        )));
    }

    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("更新最后登录时间失败 {}: {}", user.id, e);
    }

    let principal = match load_principal(&storage, user.id).await {
        Ok(principal) => principal,
        Err(e) => return Ok(internal_error("加载用户权限失败", e)),
    };

    let tokens = match JwtUtils::generate_token_pair(
        user.id,
        &user.username,
        login_request.remember_me,
    ) {
        Ok(tokens) => tokens,
        Err(e) => return Ok(internal_error("生成令牌失败", e)),
    };

    if let Some(cache) = cache_from_request(request) {
        cache
            .insert_json(
                principal_cache_key(&tokens.access_token),
                &principal,
                AppConfig::get().cache.default_ttl,
            )
            .await;
    }

    let profile = match build_profile(&storage, principal).await {
        Ok(profile) => profile,
        Err(e) => return Ok(internal_error("加载用户资料失败", e)),
    };

    info!("用户 {} 登录成功", user.username);
    let cookie = JwtUtils::create_refresh_token_cookie(&tokens.refresh_token, login_request.remember_me);
    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            access_token: tokens.access_token,
            token_type: "Bearer",
            expires_in: JwtUtils::access_token_ttl(),
            user: profile,
        },
        "登录成功",
    )))
}
