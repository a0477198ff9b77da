use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentStatusService;
use crate::models::{ApiResponse, ErrorCode, student_status::requests::StudentStatusListParams};
use crate::services::{internal_error, not_found};

pub async fn list_records(
    service: &StudentStatusService,
    query: StudentStatusListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_student_status_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取学籍异动列表成功"))),
        Err(e) => Ok(internal_error("获取学籍异动列表失败", e)),
    }
}

pub async fn get_record(
    service: &StudentStatusService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_status_detail(record_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取学籍异动成功"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentStatusNotFound, "学籍异动记录不存在")),
        Err(e) => Ok(internal_error("获取学籍异动失败", e)),
    }
}
