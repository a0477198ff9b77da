use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::EnrollmentListParams};
use crate::services::students::access::own_student;
use crate::services::{current_user, internal_error, not_found};

pub async fn list_enrollments(
    service: &EnrollmentService,
    query: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取选课列表成功"))),
        Err(e) => Ok(internal_error("获取选课列表失败", e)),
    }
}

pub async fn my_enrollments(
    service: &EnrollmentService,
    mut query: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let Some(student) = own_student(&storage, &principal).await? else {
        return Ok(not_found(ErrorCode::ProfileNotBound, "当前用户未绑定学生档案"));
    };
    query.student_id = Some(student.student.id);

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取我的选课成功"))),
        Err(e) => Ok(internal_error("获取我的选课失败", e)),
    }
}
