use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduleService;
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::requests::{MyScheduleParams, ScheduleListParams},
};
use crate::services::students::access::own_student;
use crate::services::teachers::access::own_teacher;
use crate::services::{current_user, internal_error, not_found};

pub async fn list_schedules(
    service: &ScheduleService,
    query: ScheduleListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_schedules_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取排课列表成功"))),
        Err(e) => Ok(internal_error("获取排课列表失败", e)),
    }
}

pub async fn get_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_schedule_detail(schedule_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取排课成功"))),
        Ok(None) => Ok(not_found(ErrorCode::ScheduleNotFound, "排课不存在")),
        Err(e) => Ok(internal_error("获取排课失败", e)),
    }
}

/// 学生看已通过选课的排课，教师看本人开课的排课
pub async fn my_schedule(
    service: &ScheduleService,
    query: MyScheduleParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;
    let semester = query.semester.filter(|s| !s.trim().is_empty());

    let result = if let Some(student) = own_student(&storage, &principal).await? {
        storage
            .list_student_schedules(student.student.id, semester)
            .await
    } else if let Some(teacher) = own_teacher(&storage, &principal).await? {
        storage
            .list_teacher_schedules(teacher.teacher.id, semester)
            .await
    } else {
        return Ok(not_found(
            ErrorCode::ProfileNotBound,
            "当前用户未绑定学生或教师档案",
        ));
    };

    match result {
        Ok(schedules) => Ok(HttpResponse::Ok().json(ApiResponse::success(schedules, "获取我的课表成功"))),
        Err(e) => Ok(internal_error("获取我的课表失败", e)),
    }
}
