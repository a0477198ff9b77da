pub mod conflicts;
pub mod grid;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorCode;
use crate::models::schedules::requests::{
    ConflictCheckRequest, CreateScheduleRequest, GridViewParams, MyScheduleParams,
    ScheduleListParams, UpdateScheduleRequest,
};
use crate::services::bad_request;
use crate::utils::timetable::TimetableError;

define_service!(ScheduleService);

impl ScheduleService {
    pub async fn list_schedules(
        &self,
        query: ScheduleListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_schedules(self, query, request).await
    }

    pub async fn get_schedule(
        &self,
        schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_schedule(self, schedule_id, request).await
    }

    // 当前学生或教师的课表
    pub async fn my_schedule(
        &self,
        query: MyScheduleParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::my_schedule(self, query, request).await
    }

    pub async fn grid_view(
        &self,
        query: GridViewParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grid::grid_view(self, query, request).await
    }

    pub async fn student_schedule(
        &self,
        student_id: i64,
        query: MyScheduleParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grid::student_schedule(self, student_id, query, request).await
    }

    pub async fn create_schedule(
        &self,
        schedule: CreateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_schedule(self, schedule, request).await
    }

    pub async fn update_schedule(
        &self,
        schedule_id: i64,
        update: UpdateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_schedule(self, schedule_id, update, request).await
    }

    pub async fn delete_schedule(
        &self,
        schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_schedule(self, schedule_id, request).await
    }

    pub async fn check_conflicts(
        &self,
        check: ConflictCheckRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        conflicts::check_conflicts(self, check, request).await
    }
}

/// 时间段解析错误转为 400
pub(crate) fn slot_error(e: TimetableError) -> HttpResponse {
    let code = match e {
        TimetableError::InvalidWeeks(_) | TimetableError::EmptyWeeks => {
            ErrorCode::ScheduleInvalidWeeks
        }
        _ => ErrorCode::ScheduleInvalidTime,
    };
    bad_request(code, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timetable::TimeSlot;

    async fn code_of(resp: HttpResponse) -> i64 {
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["code"].as_i64().unwrap()
    }

    #[actix_web::test]
    async fn test_slot_error_codes() {
        let weeks = TimeSlot::parse(1, "08:00", "09:40", "x-3").unwrap_err();
        assert_eq!(code_of(slot_error(weeks)).await, ErrorCode::ScheduleInvalidWeeks as i64);

        let time = TimeSlot::parse(1, "10:00", "09:40", "1-16").unwrap_err();
        assert_eq!(code_of(slot_error(time)).await, ErrorCode::ScheduleInvalidTime as i64);

        let day = TimeSlot::parse(8, "08:00", "09:40", "1-16").unwrap_err();
        assert_eq!(code_of(slot_error(day)).await, ErrorCode::ScheduleInvalidTime as i64);
    }
}
