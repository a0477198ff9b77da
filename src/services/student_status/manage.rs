use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentStatusService;
use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    student_status::requests::{CreateStudentStatusRequest, UpdateStudentStatusRequest},
};
use crate::services::{bad_request, current_user, not_found, storage_error};

// 日期区间非法时存储层返回校验错误
fn status_error(e: SchoolSystemError, context: &str) -> HttpResponse {
    match e {
        SchoolSystemError::Validation(msg) => bad_request(ErrorCode::StudentStatusInvalidDate, msg),
        other => storage_error(
            other,
            ErrorCode::StudentNotFound,
            ErrorCode::Conflict,
            context,
        ),
    }
}

pub async fn create_record(
    service: &StudentStatusService,
    record: CreateStudentStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(end) = record.end_date
        && end < record.effective_date
    {
        return Ok(bad_request(
            ErrorCode::StudentStatusInvalidDate,
            "结束日期不能早于生效日期",
        ));
    }

    let handler = current_user(request)?;
    let storage = service.get_storage(request)?;
    match storage.create_student_status(record, handler.id()).await {
        Ok(created) => {
            info!(
                "学生 {} 学籍异动 {}，生效日期 {}",
                created.student_id, created.status_type, created.effective_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "学籍异动登记成功")))
        }
        Err(e) => Ok(status_error(e, "登记学籍异动失败")),
    }
}

pub async fn update_record(
    service: &StudentStatusService,
    record_id: i64,
    update: UpdateStudentStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_student_status(record_id, update).await {
        Ok(Some(updated)) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "学籍异动更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentStatusNotFound, "学籍异动记录不存在")),
        Err(e) => Ok(status_error(e, "更新学籍异动失败")),
    }
}

pub async fn delete_record(
    service: &StudentStatusService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student_status(record_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("学籍异动删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::StudentStatusNotFound, "学籍异动记录不存在")),
        Err(e) => Ok(status_error(e, "删除学籍异动失败")),
    }
}
