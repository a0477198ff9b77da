use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DepartmentService;
use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
};
use crate::services::{bad_request, not_found, storage_error};
use crate::utils::validate::{validate_code, validate_text};

fn check_fields(name: Option<&str>, code: Option<&str>) -> Result<(), String> {
    if let Some(name) = name {
        validate_text("部门名称", name, 1, 100)?;
    }
    if let Some(code) = code {
        validate_code("部门代码", code, 2)?;
    }
    Ok(())
}

// 上级部门非法时存储层返回校验错误
fn department_error(e: SchoolSystemError, context: &str) -> HttpResponse {
    match e {
        SchoolSystemError::Validation(msg) => bad_request(ErrorCode::DepartmentInvalidParent, msg),
        other => storage_error(
            other,
            ErrorCode::DepartmentNotFound,
            ErrorCode::DepartmentAlreadyExists,
            context,
        ),
    }
}

pub async fn create_department(
    service: &DepartmentService,
    dept: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(Some(&dept.dept_name), Some(&dept.dept_code)) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_department(dept).await {
        Ok(dept) => {
            info!("创建部门 {} ({})", dept.dept_name, dept.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(dept, "部门创建成功")))
        }
        Err(e) => Ok(department_error(e, "创建部门失败")),
    }
}

pub async fn update_department(
    service: &DepartmentService,
    dept_id: i64,
    update: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(update.dept_name.as_deref(), update.dept_code.as_deref()) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if update.parent_id == Some(Some(dept_id)) {
        return Ok(bad_request(
            ErrorCode::DepartmentInvalidParent,
            "上级部门不能是部门自身",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.update_department(dept_id, update).await {
        Ok(Some(dept)) => Ok(HttpResponse::Ok().json(ApiResponse::success(dept, "部门更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::DepartmentNotFound, "部门不存在")),
        Err(e) => Ok(department_error(e, "更新部门失败")),
    }
}

pub async fn delete_department(
    service: &DepartmentService,
    dept_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_department(dept_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("部门删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::DepartmentNotFound, "部门不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::DepartmentNotFound,
            ErrorCode::DepartmentInUse,
            "删除部门失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fields() {
        assert!(check_fields(Some("计算机学院"), Some("CS")).is_ok());
        assert!(check_fields(None, None).is_ok());
        assert!(check_fields(Some(""), None).is_err());
        assert!(check_fields(None, Some("C")).is_err());
    }

    #[test]
    fn test_invalid_parent_maps_to_bad_request() {
        let resp = department_error(SchoolSystemError::validation("x"), "测试");
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let resp = department_error(SchoolSystemError::conflict("x"), "测试");
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }
}
