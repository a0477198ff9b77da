use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::{CreateCourseRequest, UpdateCourseRequest},
};
use crate::services::{bad_request, not_found, storage_error};

use crate::utils::validate::{validate_code, validate_text};

const MAX_CREDITS: f64 = 20.0;
const MAX_HOURS: i32 = 500;

fn check_fields(
    code: Option<&str>,
    name: Option<&str>,
    credits: Option<f64>,
    hours: Option<i32>,
) -> Result<(), String> {
    if let Some(code) = code {
        validate_code("课程代码", code, 3)?;
    }
    if let Some(name) = name {
        validate_text("课程名称", name, 1, 100)?;
    }
    if let Some(credits) = credits
        && !(credits > 0.0 && credits <= MAX_CREDITS)
    {
        return Err(format!("学分必须大于 0 且不超过 {MAX_CREDITS}"));
    }
    if let Some(hours) = hours
        && !(1..=MAX_HOURS).contains(&hours)
    {
        return Err(format!("学时必须在 1 到 {MAX_HOURS} 之间"));
    }
    Ok(())
}

pub async fn create_course(
    service: &CourseService,
    mut course: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    course.course_code = course.course_code.trim().to_string();
    if let Err(msg) = check_fields(
        Some(&course.course_code),
        Some(&course.course_name),
        Some(course.credits),
        Some(course.hours),
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_course(course).await {
        Ok(course) => {
            info!("创建课程 {} {}", course.course_code, course.course_name);
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "课程创建成功")))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::DepartmentNotFound,
            ErrorCode::CourseAlreadyExists,
            "创建课程失败",
        )),
    }
}

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(
        update.course_code.as_deref(),
        update.course_name.as_deref(),
        update.credits,
        update.hours,
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.update_course(course_id, update).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(course, "课程更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "课程不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::DepartmentNotFound,
            ErrorCode::CourseAlreadyExists,
            "更新课程失败",
        )),
    }
}

pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_course(course_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("课程删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::CourseNotFound, "课程不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::CourseNotFound,
            ErrorCode::CourseInUse,
            "删除课程失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_and_hour_bounds() {
        assert!(check_fields(Some("CS101"), Some("数据结构"), Some(3.5), Some(64)).is_ok());
        assert!(check_fields(None, None, Some(0.0), None).is_err());
        assert!(check_fields(None, None, Some(-1.0), None).is_err());
        assert!(check_fields(None, None, Some(f64::NAN), None).is_err());
        assert!(check_fields(None, None, None, Some(0)).is_err());
        assert!(check_fields(None, None, None, Some(MAX_HOURS + 1)).is_err());
    }

    #[test]
    fn test_course_code_rules() {
        assert!(check_fields(Some("CS"), None, None, None).is_err());
        assert!(check_fields(Some("CS-101"), None, None, None).is_ok());
    }
}
