/*!
 * 权限校验中间件
 *
 * 需在 RequireJWT 之后执行（actix 中后 `wrap` 的先执行，因此写在 RequireJWT 之前）。
 * 默认满足任一权限即可，`all` 要求全部权限；超级管理员直接放行。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_error_response;
use crate::models::{ErrorCode, auth::CurrentUser};

#[derive(Clone)]
pub struct RequirePermission {
    codes: Rc<[&'static str]>,
    require_all: bool,
}

impl RequirePermission {
    /// 任一权限即可
    pub fn any(codes: &[&'static str]) -> Self {
        Self {
            codes: codes.into(),
            require_all: false,
        }
    }

    /// 需要全部权限
    pub fn all(codes: &[&'static str]) -> Self {
        Self {
            codes: codes.into(),
            require_all: true,
        }
    }

    fn allows(&self, user: &CurrentUser) -> bool {
        if self.require_all {
            user.has_all_permissions(&self.codes)
        } else {
            user.has_permission(&self.codes)
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            rule: self.clone(),
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    rule: RequirePermission,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
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
        let rule = self.rule.clone();

        Box::pin(async move {
            if req.method() == Method::OPTIONS {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            let principal = req.extensions().get::<CurrentUser>().cloned();
            match principal {
                Some(user) if rule.allows(&user) => Ok(srv.call(req).await?.map_into_left_body()),
                Some(user) => {
                    info!(
                        "用户 {} 访问 {} 被拒绝，需要权限 {:?}",
                        user.id(),
                        req.path(),
                        rule.codes
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            "没有访问该资源的权限",
                        )
                        .map_into_right_body(),
                    ))
                }
                None => {
                    info!("权限校验时未找到认证信息，RequireJWT 需先执行");
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "需要登录",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
