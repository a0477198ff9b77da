use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::OfferingService;
use crate::models::{
    ApiResponse, ErrorCode,
    course_offerings::requests::{CreateOfferingRequest, UpdateOfferingRequest},
};
use crate::services::{bad_request, not_found, reference_error, storage_error};
use crate::utils::validate::validate_semester;

const MAX_CAPACITY: i32 = 1000;

const REFERENCES: &[(&str, ErrorCode)] = &[
    ("课程", ErrorCode::CourseNotFound),
    ("教师", ErrorCode::TeacherNotFound),
];

fn check_capacity(max_students: Option<i32>) -> Result<(), String> {
    match max_students {
        Some(max) if !(1..=MAX_CAPACITY).contains(&max) => {
            Err(format!("容量必须在 1 到 {MAX_CAPACITY} 之间"))
        }
        _ => Ok(()),
    }
}

pub async fn create_offering(
    service: &OfferingService,
    mut offering: CreateOfferingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    offering.semester = offering.semester.trim().to_string();
    if let Err(msg) = validate_semester(&offering.semester) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = check_capacity(offering.max_students) {
        return Ok(bad_request(ErrorCode::OfferingCapacityInvalid, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_offering(offering).await {
        Ok(offering) => {
            info!(
                "创建开课 {} (课程 {}, 教师 {}, {})",
                offering.id, offering.course_id, offering.teacher_id, offering.semester
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(offering, "开课创建成功")))
        }
        Err(e) => Ok(reference_error(e, REFERENCES, ErrorCode::Conflict, "创建开课失败")),
    }
}

pub async fn update_offering(
    service: &OfferingService,
    offering_id: i64,
    update: UpdateOfferingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref semester) = update.semester
        && let Err(msg) = validate_semester(semester)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    if let Err(msg) = check_capacity(update.max_students) {
        return Ok(bad_request(ErrorCode::OfferingCapacityInvalid, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.update_offering(offering_id, update).await {
        Ok(Some(offering)) => Ok(HttpResponse::Ok().json(ApiResponse::success(offering, "开课更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::OfferingNotFound, "开课不存在")),
        Err(e) => Ok(reference_error(
            e,
            REFERENCES,
            ErrorCode::OfferingCapacityInvalid,
            "更新开课失败",
        )),
    }
}

pub async fn delete_offering(
    service: &OfferingService,
    offering_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_offering(offering_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("开课删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::OfferingNotFound, "开课不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::OfferingNotFound,
            ErrorCode::OfferingInUse,
            "删除开课失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_capacity() {
        assert!(check_capacity(None).is_ok());
        assert!(check_capacity(Some(60)).is_ok());
        assert!(check_capacity(Some(0)).is_err());
        assert!(check_capacity(Some(MAX_CAPACITY + 1)).is_err());
    }
}
