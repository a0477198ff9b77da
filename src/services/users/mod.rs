pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod manage;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::common::BatchDeleteRequest;
use crate::models::users::requests::{
    AssignRolesRequest, CreateUserRequest, ResetPasswordRequest, UpdateUserRequest,
    UserListParams,
};

define_service!(UserService);

impl UserService {
    // 获取用户列表
    pub async fn list_users(
        &self,
        query: UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, query, request).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_user(self, user_id, request).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        user_id: i64,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, user_id, update_data, request).await
    }

    // 删除用户
    pub async fn delete_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, user_id, request).await
    }

    // 批量删除
    pub async fn batch_delete_users(
        &self,
        batch: BatchDeleteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::batch_delete_users(self, batch, request).await
    }

    // 重置密码
    pub async fn reset_password(
        &self,
        user_id: i64,
        reset: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::reset_password(self, user_id, reset, request).await
    }

    // 启用/禁用
    pub async fn toggle_status(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::toggle_status(self, user_id, request).await
    }

    // 分配角色
    pub async fn assign_roles(
        &self,
        user_id: i64,
        assign: AssignRolesRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::assign_roles(self, user_id, assign, request).await
    }
}
