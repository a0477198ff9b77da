use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EnrollmentService, enrollment_error};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode, enrollments::requests::CreateEnrollmentRequest, permissions::codes,
};
use crate::services::students::access::own_student;
use crate::services::{current_user, forbidden, internal_error, not_found};

/// 学生为自己选课；持有选课管理权限时可为指定学生代选
pub async fn create_enrollment(
    service: &EnrollmentService,
    enrollment: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;
    let is_manager = principal.has_permission(&[codes::ENROLLMENT_MANAGE]);

    let student_id = match enrollment.student_id {
        Some(student_id) if is_manager => student_id,
        Some(_) => return Ok(forbidden("无权为其他学生选课")),
        None => match own_student(&storage, &principal).await? {
            Some(own) => own.student.id,
            None => {
                return Ok(not_found(ErrorCode::ProfileNotBound, "当前用户未绑定学生档案"));
            }
        },
    };

    // 管理员代选直接通过；学生自选按配置决定是否需要审批
    let auto_approve = is_manager || !AppConfig::get().academic.enrollment_requires_approval;

    match storage
        .create_enrollment(student_id, enrollment.offering_id, auto_approve)
        .await
    {
        Ok(created) => {
            info!(
                "学生 {} 选课 {}，状态 {}",
                created.student_id, created.offering_id, created.status
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "选课成功")))
        }
        Err(e) => Ok(enrollment_error(e, "选课失败")),
    }
}

/// 学生只能退自己的选课
pub async fn withdraw_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let existing = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return Ok(not_found(ErrorCode::EnrollmentNotFound, "选课记录不存在")),
        Err(e) => return Ok(internal_error("退课失败", e)),
    };

    if !principal.has_permission(&[codes::ENROLLMENT_MANAGE, codes::ENROLLMENT_DELETE]) {
        let owns = own_student(&storage, &principal)
            .await?
            .is_some_and(|own| own.student.id == existing.student_id);
        if !owns {
            return Ok(forbidden("只能退选本人的课程"));
        }
    }

    match storage.withdraw_enrollment(enrollment_id).await {
        Ok(withdrawn) => Ok(HttpResponse::Ok().json(ApiResponse::success(withdrawn, "退课成功"))),
        Err(e) => Ok(enrollment_error(e, "退课失败")),
    }
}
