use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::StudentListParams};
use crate::services::{internal_error, not_found};

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_students_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取学生列表成功"))),
        Err(e) => Ok(internal_error("获取学生列表失败", e)),
    }
}

pub async fn get_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_detail(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "获取学生成功"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => Ok(internal_error("获取学生失败", e)),
    }
}

pub async fn get_student_by_user(
    service: &StudentService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_by_user_id(user_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "获取学生成功"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "该用户未绑定学生档案")),
        Err(e) => Ok(internal_error("获取学生失败", e)),
    }
}
