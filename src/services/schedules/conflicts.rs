use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScheduleService, slot_error};
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::{
        entities::ScheduleConflictQuery, requests::ConflictCheckRequest,
        responses::ConflictCheckResponse,
    },
};
use crate::services::{bad_request, internal_error};
use crate::utils::timetable::TimeSlot;

/// 只检测不写入；教室与教师都未给出时没有可比较的维度
pub async fn check_conflicts(
    service: &ScheduleService,
    check: ConflictCheckRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if check.classroom_id.is_none() && check.teacher_id.is_none() {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "classroom_id 与 teacher_id 至少提供一个",
        ));
    }
    let slot = match TimeSlot::parse(
        check.day_of_week,
        &check.start_time,
        &check.end_time,
        &check.weeks,
    ) {
        Ok(slot) => slot,
        Err(e) => return Ok(slot_error(e)),
    };

    let query = ScheduleConflictQuery {
        slot,
        classroom_id: check.classroom_id,
        teacher_id: check.teacher_id,
        semester: check.semester.filter(|s| !s.trim().is_empty()),
        exclude_schedule_id: check.exclude_schedule_id,
    };

    let storage = service.get_storage(request)?;
    match storage.find_schedule_conflicts(query).await {
        Ok(details) => {
            let response = ConflictCheckResponse {
                conflicts: !details.is_empty(),
                details,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "冲突检测完成")))
        }
        Err(e) => Ok(internal_error("冲突检测失败", e)),
    }
}
