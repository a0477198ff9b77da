use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::{ApiResponse, ErrorCode, departments::requests::DepartmentListParams};
use crate::services::{internal_error, not_found};
use crate::utils::department_tree::build_department_tree;

pub async fn list_departments(
    service: &DepartmentService,
    query: DepartmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_departments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取部门列表成功"))),
        Err(e) => Ok(internal_error("获取部门列表失败", e)),
    }
}

pub async fn list_all_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_departments().await {
        Ok(depts) => Ok(HttpResponse::Ok().json(ApiResponse::success(depts, "获取部门列表成功"))),
        Err(e) => Ok(internal_error("获取部门列表失败", e)),
    }
}

pub async fn department_tree(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_departments().await {
        Ok(depts) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(build_department_tree(depts), "获取部门树成功"))),
        Err(e) => Ok(internal_error("获取部门树失败", e)),
    }
}

pub async fn get_department(
    service: &DepartmentService,
    dept_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_department_by_id(dept_id).await {
        Ok(Some(dept)) => Ok(HttpResponse::Ok().json(ApiResponse::success(dept, "获取部门成功"))),
        Ok(None) => Ok(not_found(ErrorCode::DepartmentNotFound, "部门不存在")),
        Err(e) => Ok(internal_error("获取部门失败", e)),
    }
}
