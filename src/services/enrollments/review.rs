use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EnrollmentService, enrollment_error};
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::RejectEnrollmentRequest};
use crate::services::{bad_request, current_user};
use crate::utils::validate::validate_text;

pub async fn approve_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let reviewer = current_user(request)?;
    let storage = service.get_storage(request)?;

    match storage.approve_enrollment(enrollment_id, reviewer.id()).await {
        Ok(approved) => match storage.get_enrollment_detail(approved.id).await {
            Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "审批通过"))),
            _ => Ok(HttpResponse::Ok().json(ApiResponse::success(approved, "审批通过"))),
        },
        Err(e) => Ok(enrollment_error(e, "审批选课失败")),
    }
}

pub async fn reject_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    reject: RejectEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let reason = reject
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());
    if let Some(ref reason) = reason
        && let Err(msg) = validate_text("驳回原因", reason, 1, 500)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let reviewer = current_user(request)?;
    let storage = service.get_storage(request)?;

    match storage
        .reject_enrollment(enrollment_id, reviewer.id(), reason)
        .await
    {
        Ok(rejected) => match storage.get_enrollment_detail(rejected.id).await {
            Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "已驳回"))),
            _ => Ok(HttpResponse::Ok().json(ApiResponse::success(rejected, "已驳回"))),
        },
        Err(e) => Ok(enrollment_error(e, "驳回选课失败")),
    }
}
