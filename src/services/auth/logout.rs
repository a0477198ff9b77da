use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::middlewares::require_jwt::principal_cache_key;
use crate::models::ApiResponse;
use crate::services::cache_from_request;
use crate::utils::jwt::JwtUtils;

/// 下发立即过期的 refresh token cookie，并移除 access token 对应的缓存
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    if let Some(token) = RequireJWT::extract_access_token(request)
        && let Some(cache) = cache_from_request(request)
    {
        cache.remove(&principal_cache_key(&token)).await;
    }

    Ok(HttpResponse::Ok()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::success_empty("登出成功")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_logout_expires_cookie() {
        let req = TestRequest::post().to_http_request();
        let resp = handle_logout(&req).await.unwrap();
        let cookie = resp
            .cookies()
            .find(|c| c.name() == crate::utils::jwt::REFRESH_TOKEN_COOKIE)
            .unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
    }
}
