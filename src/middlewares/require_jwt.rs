/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <access token>`，加载用户及其启用的角色和权限，
 * 以 [`CurrentUser`] 放入请求扩展。认证主体按 token 缓存，TTL 为 `cache.default_ttl`。
 *
 * ```rust,ignore
 * web::scope("/users")
 *     .wrap(RequirePermission::any(&[codes::USER_VIEW]))
 *     .wrap(RequireJWT)
 * ```
 *
 * 处理程序中通过 `RequireJWT::extract_current_user(&req)` 取得当前用户。
 * 缺少或无效的 token、被禁用的账号均返回 401。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::auth::CurrentUser;
use crate::models::users::entities::UserStatus;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode, header::AUTHORIZATION},
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

/// 认证主体的缓存键
pub fn principal_cache_key(token: &str) -> String {
    format!("principal:{token}")
}

/// 从存储加载认证主体；账号不存在或未启用时返回错误
pub async fn load_principal(
    storage: &Arc<dyn Storage>,
    user_id: i64,
) -> Result<CurrentUser, String> {
    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| format!("查询用户失败: {e}"))?
        .ok_or_else(|| "用户不存在".to_string())?;

    if user.status != UserStatus::Active {
        return Err("账号已被禁用".to_string());
    }

    let authorities = storage
        .get_user_authorities(user.id)
        .await
        .map_err(|e| format!("加载用户权限失败: {e}"))?;
    Ok(CurrentUser::new(
        user,
        authorities.roles,
        authorities.permissions,
    ))
}

async fn authenticate(req: &ServiceRequest) -> Result<CurrentUser, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtUtils::extract_bearer_token)
        .ok_or_else(|| "缺少或无效的 Authorization 头".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("access token 校验失败: {}", err);
        "无效的访问令牌".to_string()
    })?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());
    let cache_key = principal_cache_key(token);

    if let Some(cache) = &cache
        && let CacheResult::Found(principal) = cache.get_json::<CurrentUser>(&cache_key).await
    {
        return Ok(principal);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "存储未初始化".to_string())?;

    let user_id = claims.user_id().map_err(|_| "令牌中的用户 ID 无效".to_string())?;
    let principal = load_principal(&storage, user_id).await?;

    if let Some(cache) = &cache {
        cache
            .insert_json(cache_key, &principal, AppConfig::get().cache.default_ttl)
            .await;
    }
    Ok(principal)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // CORS 预检
            if req.method() == Method::OPTIONS {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            }

            match authenticate(&req).await {
                Ok(principal) => {
                    debug!("用户 {} 认证通过", principal.id());
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("认证失败 {}: {}", req.path(), err);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("未认证: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 在应用了 RequireJWT 的路由中取得当前用户
    pub fn extract_current_user(req: &HttpRequest) -> Option<CurrentUser> {
        req.extensions().get::<CurrentUser>().cloned()
    }

    pub fn extract_user_id(req: &HttpRequest) -> Option<i64> {
        req.extensions().get::<CurrentUser>().map(|u| u.id())
    }

    pub fn extract_access_token(req: &HttpRequest) -> Option<String> {
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(JwtUtils::extract_bearer_token)
            .map(str::to_string)
    }
}
