pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};

define_service!(DepartmentService);

impl DepartmentService {
    pub async fn list_departments(
        &self,
        query: DepartmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_departments(self, query, request).await
    }

    pub async fn list_all_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_all_departments(self, request).await
    }

    // 部门树
    pub async fn department_tree(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::department_tree(self, request).await
    }

    pub async fn get_department(
        &self,
        dept_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_department(self, dept_id, request).await
    }

    pub async fn create_department(
        &self,
        dept: CreateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_department(self, dept, request).await
    }

    pub async fn update_department(
        &self,
        dept_id: i64,
        update: UpdateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_department(self, dept_id, update, request).await
    }

    pub async fn delete_department(
        &self,
        dept_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_department(self, dept_id, request).await
    }
}
