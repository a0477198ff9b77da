use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::requests::{AvailableClassroomParams, ClassroomListParams},
};
use crate::services::schedules::slot_error;
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::timetable::TimeSlot;

pub async fn list_classrooms(
    service: &ClassroomService,
    query: ClassroomListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_classrooms_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取教室列表成功"))),
        Err(e) => Ok(internal_error("获取教室列表失败", e)),
    }
}

pub async fn list_all_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_classrooms().await {
        Ok(rooms) => Ok(HttpResponse::Ok().json(ApiResponse::success(rooms, "获取教室列表成功"))),
        Err(e) => Ok(internal_error("获取教室列表失败", e)),
    }
}

pub async fn list_available(
    service: &ClassroomService,
    query: AvailableClassroomParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Ok(day) = i32::try_from(query.day_of_week) else {
        return Ok(bad_request(ErrorCode::ScheduleInvalidTime, "星期取值无效"));
    };
    let slot = match TimeSlot::parse(day, &query.start_time, &query.end_time, &query.weeks) {
        Ok(slot) => slot,
        Err(e) => return Ok(slot_error(e)),
    };

    let storage = service.get_storage(request)?;
    match storage
        .list_available_classrooms(
            slot,
            query.semester.filter(|s| !s.trim().is_empty()),
            query.min_capacity,
            query.room_type.map(|t| t.to_string()),
        )
        .await
    {
        Ok(rooms) => Ok(HttpResponse::Ok().json(ApiResponse::success(rooms, "获取空闲教室成功"))),
        Err(e) => Ok(internal_error("获取空闲教室失败", e)),
    }
}

pub async fn get_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(room, "获取教室成功"))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "教室不存在")),
        Err(e) => Ok(internal_error("获取教室失败", e)),
    }
}
