use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CourseListParams};
use crate::services::{internal_error, not_found};

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取课程列表成功"))),
        Err(e) => Ok(internal_error("获取课程列表失败", e)),
    }
}

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(course, "获取课程成功"))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "课程不存在")),
        Err(e) => Ok(internal_error("获取课程失败", e)),
    }
}
