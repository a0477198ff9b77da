use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use super::access::ensure_student_access;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::entities::GradeDetail,
    permissions::codes,
    students::{
        requests::TranscriptParams,
        responses::{GpaResponse, TranscriptEntry, TranscriptResponse},
    },
};
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::grading::{CreditSummary, level_label, summarize_credits};
use crate::utils::validate::validate_semester;

const GRADE_ACCESS: &[&str] = &[codes::GRADE_VIEW, codes::GRADE_MANAGE, codes::STUDENT_VIEW];
const STATUS_ACCESS: &[&str] = &[
    codes::STUDENT_STATUS_VIEW,
    codes::STUDENT_STATUS_MANAGE,
    codes::STUDENT_VIEW,
];

fn credit_summary(grades: &[GradeDetail]) -> CreditSummary {
    summarize_credits(
        grades
            .iter()
            .map(|g| (g.credits, g.grade.final_score, g.grade.grade_point)),
    )
}

pub async fn transcript(
    service: &StudentService,
    student_id: i64,
    query: TranscriptParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let semester = query.semester.filter(|s| !s.trim().is_empty());
    if let Some(ref semester) = semester
        && let Err(msg) = validate_semester(semester)
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let storage = service.get_storage(request)?;
    ensure_student_access(&storage, request, student_id, GRADE_ACCESS).await?;

    let student = match storage.get_student_detail(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => return Ok(internal_error("获取成绩单失败", e)),
    };
    let grades = match storage.list_student_grades(student_id, semester.clone()).await {
        Ok(grades) => grades,
        Err(e) => return Ok(internal_error("获取成绩单失败", e)),
    };

    let summary = credit_summary(&grades);
    let courses = grades
        .into_iter()
        .map(|grade| TranscriptEntry {
            level: level_label(grade.grade.final_score),
            grade,
        })
        .collect();

    let response = TranscriptResponse {
        student,
        semester,
        courses,
        total_credits: summary.total_credits,
        earned_credits: summary.earned_credits,
        gpa: summary.gpa,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取成绩单成功")))
}

pub async fn gpa(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    ensure_student_access(&storage, request, student_id, GRADE_ACCESS).await?;

    match storage.get_student_detail(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => return Ok(internal_error("计算GPA失败", e)),
    }

    match storage.list_student_grades(student_id, None).await {
        Ok(grades) => {
            let summary = credit_summary(&grades);
            let response = GpaResponse {
                student_id,
                gpa: summary.gpa,
                total_credits: summary.total_credits,
                earned_credits: summary.earned_credits,
                graded_courses: summary.graded_courses,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取GPA成功")))
        }
        Err(e) => Ok(internal_error("计算GPA失败", e)),
    }
}

pub async fn status_history(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    ensure_student_access(&storage, request, student_id, STATUS_ACCESS).await?;

    match storage.list_student_status_history(student_id).await {
        Ok(history) => Ok(HttpResponse::Ok().json(ApiResponse::success(history, "获取学籍异动历史成功"))),
        Err(crate::errors::SchoolSystemError::NotFound(_)) => {
            Ok(not_found(ErrorCode::StudentNotFound, "学生不存在"))
        }
        Err(e) => Ok(internal_error("获取学籍异动历史失败", e)),
    }
}

/// 当前学籍状态；没有生效中的异动记录时返回 null
pub async fn current_status(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    ensure_student_access(&storage, request, student_id, STATUS_ACCESS).await?;

    match storage.get_student_detail(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => return Ok(internal_error("获取当前学籍状态失败", e)),
    }

    match storage.get_current_student_status(student_id).await {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(record, "获取当前学籍状态成功"))),
        Err(e) => Ok(internal_error("获取当前学籍状态失败", e)),
    }
}
