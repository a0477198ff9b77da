use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OfferingService;
use crate::models::{ApiResponse, ErrorCode, course_offerings::requests::OfferingListParams};
use crate::services::teachers::access::own_teacher;
use crate::services::{current_user, internal_error, not_found};

pub async fn list_offerings(
    service: &OfferingService,
    query: OfferingListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_offerings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取开课列表成功"))),
        Err(e) => Ok(internal_error("获取开课列表失败", e)),
    }
}

pub async fn get_offering(
    service: &OfferingService,
    offering_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_offering_detail(offering_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取开课成功"))),
        Ok(None) => Ok(not_found(ErrorCode::OfferingNotFound, "开课不存在")),
        Err(e) => Ok(internal_error("获取开课失败", e)),
    }
}

pub async fn list_semesters(
    service: &OfferingService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_semesters().await {
        Ok(semesters) => Ok(HttpResponse::Ok().json(ApiResponse::success(semesters, "获取学期列表成功"))),
        Err(e) => Ok(internal_error("获取学期列表失败", e)),
    }
}

/// 教师筛选条件固定为当前用户的教师档案
pub async fn my_courses(
    service: &OfferingService,
    mut query: OfferingListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let Some(teacher) = own_teacher(&storage, &principal).await? else {
        return Ok(not_found(ErrorCode::ProfileNotBound, "当前用户未绑定教师档案"));
    };
    query.teacher_id = Some(teacher.teacher.id);

    match storage.list_offerings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取我的课程成功"))),
        Err(e) => Ok(internal_error("获取我的课程失败", e)),
    }
}
