use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::TeacherListParams};
use crate::services::{internal_error, not_found};

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取教师列表成功"))),
        Err(e) => Ok(internal_error("获取教师列表失败", e)),
    }
}

pub async fn get_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_teacher_detail(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "获取教师成功"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "教师不存在")),
        Err(e) => Ok(internal_error("获取教师失败", e)),
    }
}

pub async fn get_teacher_by_user(
    service: &TeacherService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_teacher_by_user_id(user_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "获取教师成功"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "该用户未绑定教师档案")),
        Err(e) => Ok(internal_error("获取教师失败", e)),
    }
}
