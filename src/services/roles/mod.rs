pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod permissions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::roles::requests::{
    AssignPermissionsRequest, CreateRoleRequest, RoleListParams, UpdateRoleRequest,
};

define_service!(RoleService);

impl RoleService {
    pub async fn list_roles(
        &self,
        query: RoleListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_roles(self, query, request).await
    }

    pub async fn list_all_roles(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_all_roles(self, request).await
    }

    pub async fn create_role(
        &self,
        role: CreateRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_role(self, role, request).await
    }

    // 角色详情，附带权限与持有人数
    pub async fn get_role(&self, role_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_role(self, role_id, request).await
    }

    pub async fn update_role(
        &self,
        role_id: i64,
        update: UpdateRoleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_role(self, role_id, update, request).await
    }

    pub async fn delete_role(
        &self,
        role_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_role(self, role_id, request).await
    }

    pub async fn get_role_permissions(
        &self,
        role_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        permissions::get_role_permissions(self, role_id, request).await
    }

    pub async fn assign_permissions(
        &self,
        role_id: i64,
        assign: AssignPermissionsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        permissions::assign_permissions(self, role_id, assign, request).await
    }
}
