use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScheduleService, slot_error};
use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::requests::{CreateScheduleRequest, UpdateScheduleRequest},
};
use crate::services::{not_found, reference_error};
use crate::utils::timetable::{TimeSlot, parse_clock, parse_weeks};

fn schedule_error(e: SchoolSystemError, context: &str) -> HttpResponse {
    reference_error(
        e,
        &[
            ("开课", ErrorCode::OfferingNotFound),
            ("教室", ErrorCode::ClassroomNotFound),
        ],
        ErrorCode::ScheduleConflict,
        context,
    )
}

pub async fn create_schedule(
    service: &ScheduleService,
    schedule: CreateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = TimeSlot::parse(
        schedule.day_of_week,
        &schedule.start_time,
        &schedule.end_time,
        &schedule.weeks,
    ) {
        return Ok(slot_error(e));
    }

    let storage = service.get_storage(request)?;
    match storage.create_schedule(schedule).await {
        Ok(created) => {
            info!(
                "创建排课 {} (开课 {}, 教室 {})",
                created.id, created.offering_id, created.classroom_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "排课创建成功")))
        }
        Err(e) => Ok(schedule_error(e, "创建排课失败")),
    }
}

/// 给出的字段先单独校验格式；与原值合并后的完整时间段由存储层校验
pub async fn update_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    update: UpdateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    for clock in [&update.start_time, &update.end_time].into_iter().flatten() {
        if let Err(e) = parse_clock(clock) {
            return Ok(slot_error(e));
        }
    }
    if let Some(ref weeks) = update.weeks
        && let Err(e) = parse_weeks(weeks)
    {
        return Ok(slot_error(e));
    }

    let storage = service.get_storage(request)?;
    match storage.update_schedule(schedule_id, update).await {
        Ok(Some(updated)) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "排课更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::ScheduleNotFound, "排课不存在")),
        Err(e) => Ok(schedule_error(e, "更新排课失败")),
    }
}

pub async fn delete_schedule(
    service: &ScheduleService,
    schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_schedule(schedule_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("排课删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::ScheduleNotFound, "排课不存在")),
        Err(e) => Ok(schedule_error(e, "删除排课失败")),
    }
}
