use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::{ApiResponse, ErrorCode, auth::RefreshTokenResponse};
use crate::services::internal_error;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn expired() -> HttpResponse {
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "登录已过期，请重新登录",
        ))
}

/// 用 cookie 中的 refresh token 换取新的 access token；账号须仍处于启用状态
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let user_id = match JwtUtils::verify_refresh_token(&refresh_token).and_then(|c| c.user_id()) {
        Ok(id) => id,
        Err(e) => {
            info!("refresh token 无效: {}", e);
            return Ok(expired());
        }
    };

    let storage = service.get_storage(request)?;
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.is_active() => user,
        Ok(_) => return Ok(expired()),
        Err(e) => return Ok(internal_error("刷新令牌失败", e)),
    };

    match JwtUtils::generate_access_token(user.id, &user.username) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                token_type: "Bearer",
                expires_in: JwtUtils::access_token_ttl(),
            },
            "令牌刷新成功",
        ))),
        Err(e) => Ok(internal_error("生成令牌失败", e)),
    }
}
