use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduleService;
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::{
        entities::ScheduleDetail,
        requests::{GridViewParams, MyScheduleParams},
        responses::{GridEntry, ScheduleGridResponse},
    },
};
use crate::services::{internal_error, not_found};
use crate::utils::timetable::{TimeSlot, day_name};

/// 两条已存排课是否冲突；无法解析的一方按冲突处理
fn stored_pair_conflicts(a: &ScheduleDetail, b: &ScheduleDetail) -> bool {
    let (a, b) = (&a.schedule, &b.schedule);
    match TimeSlot::parse(a.day_of_week, &a.start_time, &a.end_time, &a.weeks) {
        Ok(slot) => {
            slot.conflicts_with_stored(b.day_of_week, &b.start_time, &b.end_time, &b.weeks)
        }
        Err(_) => match TimeSlot::parse(b.day_of_week, &b.start_time, &b.end_time, &b.weeks) {
            Ok(slot) => {
                slot.conflicts_with_stored(a.day_of_week, &a.start_time, &a.end_time, &a.weeks)
            }
            Err(_) => a.day_of_week == b.day_of_week,
        },
    }
}

/// 为课程表标记冲突：同一教室或同一教师的时段重叠
pub fn build_grid(schedules: Vec<ScheduleDetail>, include_conflicts: bool) -> Vec<GridEntry> {
    let mut conflicts: Vec<Vec<i64>> = vec![Vec::new(); schedules.len()];
    if include_conflicts {
        for i in 0..schedules.len() {
            for j in (i + 1)..schedules.len() {
                let (a, b) = (&schedules[i], &schedules[j]);
                let shared = a.schedule.classroom_id == b.schedule.classroom_id
                    || a.teacher_id == b.teacher_id;
                if shared && stored_pair_conflicts(a, b) {
                    conflicts[i].push(b.schedule.id);
                    conflicts[j].push(a.schedule.id);
                }
            }
        }
    }

    schedules
        .into_iter()
        .zip(conflicts)
        .map(|(detail, conflict_with)| GridEntry {
            day_name: day_name(detail.schedule.day_of_week),
            has_conflict: !conflict_with.is_empty(),
            conflict_with,
            detail,
        })
        .collect()
}

pub async fn grid_view(
    service: &ScheduleService,
    query: GridViewParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let semester = match query.semester.filter(|s| !s.trim().is_empty()) {
        Some(semester) => Some(semester.trim().to_string()),
        None => match storage.list_semesters().await {
            Ok(semesters) => semesters.into_iter().next(),
            Err(e) => return Ok(internal_error("获取学期列表失败", e)),
        },
    };
    let Some(semester) = semester else {
        let empty = ScheduleGridResponse {
            semester: None,
            items: Vec::new(),
        };
        return Ok(HttpResponse::Ok().json(ApiResponse::success(empty, "暂无排课学期")));
    };

    match storage
        .list_semester_schedules(&semester, query.teacher_id, query.classroom_id)
        .await
    {
        Ok(schedules) => {
            let grid = ScheduleGridResponse {
                items: build_grid(schedules, query.include_conflicts.unwrap_or(true)),
                semester: Some(semester),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(grid, "获取课程表成功")))
        }
        Err(e) => Ok(internal_error("获取课程表失败", e)),
    }
}

/// 管理员查看指定学生的课表
pub async fn student_schedule(
    service: &ScheduleService,
    student_id: i64,
    query: MyScheduleParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_student_detail(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => return Ok(internal_error("获取学生失败", e)),
    }

    let semester = query.semester.filter(|s| !s.trim().is_empty());
    match storage.list_student_schedules(student_id, semester).await {
        Ok(schedules) => Ok(HttpResponse::Ok().json(ApiResponse::success(schedules, "获取学生课表成功"))),
        Err(e) => Ok(internal_error("获取学生课表失败", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedules::entities::Schedule;

    fn detail(
        id: i64,
        classroom_id: i64,
        teacher_id: i64,
        start: &str,
        end: &str,
        weeks: &str,
    ) -> ScheduleDetail {
        let now = chrono::Utc::now();
        ScheduleDetail {
            schedule: Schedule {
                id,
                offering_id: id,
                classroom_id,
                day_of_week: 2,
                start_time: start.to_string(),
                end_time: end.to_string(),
                weeks: weeks.to_string(),
                created_at: now,
                updated_at: now,
            },
            course_code: format!("C{id}"),
            course_name: "课程".to_string(),
            semester: "2024-2025-1".to_string(),
            teacher_id,
            teacher_name: "教师".to_string(),
            room_no: "101".to_string(),
            building: "一教".to_string(),
        }
    }

    #[test]
    fn test_grid_marks_room_and_teacher_clashes() {
        let grid = build_grid(
            vec![
                detail(1, 10, 100, "08:00", "09:40", "1-16"),
                // 同教室、时段重叠
                detail(2, 10, 200, "09:00", "10:40", "1-8"),
                // 不同教室但同教师
                detail(3, 20, 100, "08:30", "09:00", "3"),
                // 周次不重叠
                detail(4, 10, 300, "08:00", "09:40", "17-18"),
            ],
            true,
        );
        assert_eq!(grid[0].conflict_with, vec![2, 3]);
        assert_eq!(grid[1].conflict_with, vec![1]);
        assert_eq!(grid[2].conflict_with, vec![1]);
        assert!(!grid[3].has_conflict);
        assert_eq!(grid[0].day_name, "周二");
    }

    #[test]
    fn test_grid_without_conflict_detection() {
        let grid = build_grid(
            vec![
                detail(1, 10, 100, "08:00", "09:40", "1-16"),
                detail(2, 10, 100, "08:00", "09:40", "1-16"),
            ],
            false,
        );
        assert!(grid.iter().all(|entry| !entry.has_conflict));
    }

    #[test]
    fn test_unparsable_stored_slot_counts_as_clash() {
        let grid = build_grid(
            vec![
                detail(1, 10, 100, "bad", "09:40", "1-16"),
                detail(2, 10, 200, "14:00", "15:40", "1-16"),
            ],
            true,
        );
        assert!(grid[0].has_conflict && grid[1].has_conflict);
    }
}
