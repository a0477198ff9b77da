pub mod login;
pub mod logout;
pub mod profile;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::{ChangePasswordRequest, LoginRequest};

define_service!(
    /// 登录、令牌刷新与当前用户信息
    AuthService
);

impl AuthService {
    // 登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 登出
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(request).await
    }

    // 刷新 access token
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // 当前用户资料
    pub async fn profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_profile(self, request).await
    }

    // 修改本人密码
    pub async fn change_password(
        &self,
        change: ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_change_password(self, change, request).await
    }

    // 按权限过滤的菜单
    pub async fn menus(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_menus(request).await
    }
}
