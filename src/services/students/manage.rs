use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::services::{bad_request, not_found, reference_error, storage_error};
use crate::utils::validate::{validate_code, validate_text};

const REFERENCES: &[(&str, ErrorCode)] = &[
    ("用户", ErrorCode::UserNotFound),
    ("部门", ErrorCode::DepartmentNotFound),
];

fn check_fields(
    student_no: Option<&str>,
    class_name: Option<&str>,
    enrollment_year: Option<i32>,
    graduation_year: Option<i32>,
) -> Result<(), String> {
    if let Some(no) = student_no {
        validate_code("学号", no, 4)?;
    }
    if let Some(class_name) = class_name {
        validate_text("班级", class_name, 1, 50)?;
    }
    if let (Some(start), Some(end)) = (enrollment_year, graduation_year)
        && end < start
    {
        return Err("毕业年份不能早于入学年份".to_string());
    }
    Ok(())
}

pub async fn create_student(
    service: &StudentService,
    mut student: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    student.student_no = student.student_no.trim().to_string();
    if let Err(msg) = check_fields(
        Some(&student.student_no),
        student.class_name.as_deref(),
        student.enrollment_year,
        student.graduation_year,
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_student(student).await {
        Ok(student) => {
            info!("创建学生档案 {} (用户 {})", student.student_no, student.user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "学生创建成功")))
        }
        Err(e) => Ok(reference_error(
            e,
            REFERENCES,
            ErrorCode::StudentAlreadyExists,
            "创建学生失败",
        )),
    }
}

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(
        update.student_no.as_deref(),
        update.class_name.as_deref(),
        update.enrollment_year,
        update.graduation_year,
    ) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "学生更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => Ok(reference_error(
            e,
            REFERENCES,
            ErrorCode::StudentAlreadyExists,
            "更新学生失败",
        )),
    }
}

/// 仍有选课记录时拒绝删除
pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_student(student_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("学生删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::StudentNotFound,
            ErrorCode::Conflict,
            "删除学生失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fields() {
        assert!(check_fields(Some("20240001"), Some("计科2401"), Some(2024), Some(2028)).is_ok());
        assert!(check_fields(Some("2024 01"), None, None, None).is_err());
        assert!(check_fields(None, None, Some(2024), Some(2020)).is_err());
        assert!(check_fields(None, None, None, Some(2020)).is_ok());
    }
}
