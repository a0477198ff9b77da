use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use crate::services::{bad_request, not_found, reference_error, storage_error};
use crate::utils::validate::{validate_code, validate_text};

const REFERENCES: &[(&str, ErrorCode)] = &[
    ("用户", ErrorCode::UserNotFound),
    ("部门", ErrorCode::DepartmentNotFound),
];

fn check_fields(teacher_no: Option<&str>, title: Option<&str>) -> Result<(), String> {
    if let Some(no) = teacher_no {
        validate_code("工号", no, 2)?;
    }
    if let Some(title) = title {
        validate_text("职称", title, 1, 50)?;
    }
    Ok(())
}

pub async fn create_teacher(
    service: &TeacherService,
    mut teacher: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    teacher.teacher_no = teacher.teacher_no.trim().to_string();
    if let Err(msg) = check_fields(Some(&teacher.teacher_no), teacher.title.as_deref()) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.create_teacher(teacher).await {
        Ok(teacher) => {
            info!("创建教师档案 {} (用户 {})", teacher.teacher_no, teacher.user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(teacher, "教师创建成功")))
        }
        Err(e) => Ok(reference_error(
            e,
            REFERENCES,
            ErrorCode::TeacherAlreadyExists,
            "创建教师失败",
        )),
    }
}

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    update: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_fields(update.teacher_no.as_deref(), update.title.as_deref()) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    match storage.update_teacher(teacher_id, update).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "教师更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "教师不存在")),
        Err(e) => Ok(reference_error(
            e,
            REFERENCES,
            ErrorCode::TeacherAlreadyExists,
            "更新教师失败",
        )),
    }
}

/// 仍有开课时拒绝删除
pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("教师删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::TeacherNotFound, "教师不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::TeacherNotFound,
            ErrorCode::Conflict,
            "删除教师失败",
        )),
    }
}
