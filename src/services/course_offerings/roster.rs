use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::OfferingService;
use crate::models::{ApiResponse, ErrorCode, permissions::codes};
use crate::services::teachers::access::ensure_offering_owner;
use crate::services::{current_user, internal_error, not_found};

/// 选课管理权限可查看任意名单；仅有学生名单权限的教师只能看本人开课
pub async fn roster(
    service: &OfferingService,
    offering_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let offering = match storage.get_offering_by_id(offering_id).await {
        Ok(Some(offering)) => offering,
        Ok(None) => return Ok(not_found(ErrorCode::OfferingNotFound, "开课不存在")),
        Err(e) => return Ok(internal_error("获取选课名单失败", e)),
    };
    ensure_offering_owner(
        &storage,
        &principal,
        offering.teacher_id,
        &[codes::ENROLLMENT_VIEW, codes::ENROLLMENT_MANAGE],
    )
    .await?;

    match storage.list_offering_enrollments(offering_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "获取选课名单成功"))),
        Err(e) => Ok(internal_error("获取选课名单失败", e)),
    }
}
