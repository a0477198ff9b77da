use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode, grades::requests::GradeListParams, permissions::codes,
    students::requests::TranscriptParams,
};
use crate::services::students::access::own_student;
use crate::services::teachers::access::ensure_offering_owner;
use crate::services::{current_user, internal_error, not_found};

pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_grades_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取成绩列表成功"))),
        Err(e) => Ok(internal_error("获取成绩列表失败", e)),
    }
}

pub async fn my_grades(
    service: &GradeService,
    query: TranscriptParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let Some(student) = own_student(&storage, &principal).await? else {
        return Ok(not_found(ErrorCode::ProfileNotBound, "当前用户未绑定学生档案"));
    };
    let semester = query.semester.filter(|s| !s.trim().is_empty());

    match storage.list_student_grades(student.student.id, semester).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "获取我的成绩成功"))),
        Err(e) => Ok(internal_error("获取我的成绩失败", e)),
    }
}

/// 某开课的全部成绩；任课教师或持有成绩查看权限者可见
pub async fn offering_grades(
    service: &GradeService,
    offering_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let offering = match storage.get_offering_by_id(offering_id).await {
        Ok(Some(offering)) => offering,
        Ok(None) => return Ok(not_found(ErrorCode::OfferingNotFound, "开课不存在")),
        Err(e) => return Ok(internal_error("获取开课成绩失败", e)),
    };
    ensure_offering_owner(
        &storage,
        &principal,
        offering.teacher_id,
        &[codes::GRADE_VIEW, codes::GRADE_MANAGE],
    )
    .await?;

    match storage.list_offering_grades(offering_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "获取开课成绩成功"))),
        Err(e) => Ok(internal_error("获取开课成绩失败", e)),
    }
}
