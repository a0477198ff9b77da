use super::SeaOrmStorage;
use super::lookups::{fetch_page, offering_ids_for_semester, schedule_details};
use crate::entity::schedules::{ActiveModel, Column, Entity as Schedules};
use crate::entity::{classrooms, course_offerings, enrollments};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    classrooms::entities::ClassroomStatus,
    enrollments::entities::EnrollmentStatus,
    schedules::{
        entities::{Schedule, ScheduleConflictQuery, ScheduleDetail},
        requests::{CreateScheduleRequest, ScheduleListParams, UpdateScheduleRequest},
        responses::ScheduleListResponse,
    },
};
use crate::utils::timetable::{TimeSlot, day_name};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

fn clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

async fn teacher_offering_ids<C: ConnectionTrait>(
    db: &C,
    teacher_id: i64,
    semester: Option<&str>,
) -> Result<Vec<i64>> {
    let mut select = course_offerings::Entity::find()
        .select_only()
        .column(course_offerings::Column::Id)
        .filter(course_offerings::Column::TeacherId.eq(teacher_id));
    if let Some(semester) = semester.filter(|s| !s.trim().is_empty()) {
        select = select.filter(course_offerings::Column::Semester.eq(semester.trim()));
    }
    Ok(select.into_tuple().all(db).await?)
}

/// 同一天内与给定时段冲突的教室/教师排课描述
async fn detect_conflicts<C: ConnectionTrait>(
    db: &C,
    query: &ScheduleConflictQuery,
) -> Result<Vec<String>> {
    if query.classroom_id.is_none() && query.teacher_id.is_none() {
        return Ok(Vec::new());
    }

    let teacher_offerings = match query.teacher_id {
        Some(teacher_id) => teacher_offering_ids(db, teacher_id, query.semester.as_deref()).await?,
        None => Vec::new(),
    };

    let mut scope = Condition::any();
    if let Some(classroom_id) = query.classroom_id {
        scope = scope.add(Column::ClassroomId.eq(classroom_id));
    }
    if !teacher_offerings.is_empty() {
        scope = scope.add(Column::OfferingId.is_in(teacher_offerings.clone()));
    }

    let mut select = Schedules::find()
        .filter(Column::DayOfWeek.eq(query.slot.day_of_week))
        .filter(scope);
    if let Some(exclude) = query.exclude_schedule_id {
        select = select.filter(Column::Id.ne(exclude));
    }
    if let Some(ids) = offering_ids_for_semester(db, query.semester.as_deref()).await? {
        select = select.filter(Column::OfferingId.is_in(ids));
    }

    let clashing: Vec<_> = select
        .order_by_asc(Column::StartTime)
        .all(db)
        .await?
        .into_iter()
        .filter(|s| {
            query
                .slot
                .conflicts_with_stored(s.day_of_week, &s.start_time, &s.end_time, &s.weeks)
        })
        .collect();

    let details = schedule_details(db, clashing).await?;
    let mut messages = Vec::new();
    for d in details {
        let when = format!(
            "{} {}-{} 第{}周",
            day_name(d.schedule.day_of_week),
            d.schedule.start_time,
            d.schedule.end_time,
            d.schedule.weeks
        );
        if query.classroom_id == Some(d.schedule.classroom_id) {
            messages.push(format!(
                "教室冲突：{} {} 在 {} 已安排 {}",
                d.building, d.room_no, when, d.course_name
            ));
        }
        if teacher_offerings.contains(&d.schedule.offering_id) {
            messages.push(format!(
                "教师冲突：{} 在 {} 已安排 {}",
                d.teacher_name, when, d.course_name
            ));
        }
    }
    Ok(messages)
}

/// 排课写入前的校验：开课与教室存在，教室可用，无冲突
async fn check_schedule<C: ConnectionTrait>(
    db: &C,
    offering_id: i64,
    classroom_id: i64,
    slot: &TimeSlot,
    exclude_schedule_id: Option<i64>,
) -> Result<()> {
    let Some(offering) = course_offerings::Entity::find_by_id(offering_id).one(db).await? else {
        return Err(SchoolSystemError::not_found(format!("开课 {offering_id} 不存在")));
    };
    let Some(room) = classrooms::Entity::find_by_id(classroom_id).one(db).await? else {
        return Err(SchoolSystemError::not_found(format!("教室 {classroom_id} 不存在")));
    };
    if room.status != ClassroomStatus::Available.as_str() {
        return Err(SchoolSystemError::conflict(format!(
            "教室 {} {} 当前不可用",
            room.building, room.room_no
        )));
    }

    let conflicts = detect_conflicts(
        db,
        &ScheduleConflictQuery {
            slot: slot.clone(),
            classroom_id: Some(classroom_id),
            teacher_id: Some(offering.teacher_id),
            semester: Some(offering.semester),
            exclude_schedule_id,
        },
    )
    .await?;
    if !conflicts.is_empty() {
        return Err(SchoolSystemError::conflict(conflicts.join("; ")));
    }
    Ok(())
}

fn parse_slot(day: i32, start: &str, end: &str, weeks: &str) -> Result<TimeSlot> {
    TimeSlot::parse(day, start, end, weeks).map_err(|e| SchoolSystemError::validation(e.to_string()))
}

impl SeaOrmStorage {
    /// 创建排课，冲突检测与写入在同一事务内
    pub async fn create_schedule_impl(&self, req: CreateScheduleRequest) -> Result<Schedule> {
        let slot = parse_slot(req.day_of_week, &req.start_time, &req.end_time, &req.weeks)?;
        let txn = self.db.begin().await?;
        check_schedule(&txn, req.offering_id, req.classroom_id, &slot, None).await?;

        let now = chrono::Utc::now().timestamp();
        let schedule = ActiveModel {
            offering_id: Set(req.offering_id),
            classroom_id: Set(req.classroom_id),
            day_of_week: Set(slot.day_of_week),
            start_time: Set(clock(slot.start)),
            end_time: Set(clock(slot.end)),
            weeks: Set(req.weeks.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(schedule.into_schedule())
    }

    pub async fn get_schedule_detail_impl(&self, id: i64) -> Result<Option<ScheduleDetail>> {
        let Some(schedule) = Schedules::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(schedule_details(&self.db, vec![schedule]).await?.pop())
    }

    pub async fn list_schedules_with_pagination_impl(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse> {
        let mut select = Schedules::find();

        if let Some(offering_id) = query.offering_id {
            select = select.filter(Column::OfferingId.eq(offering_id));
        }
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }
        if let Some(day) = query.day_of_week {
            select = select.filter(Column::DayOfWeek.eq(day));
        }
        if let Some(teacher_id) = query.teacher_id {
            let ids = teacher_offering_ids(&self.db, teacher_id, query.semester.as_deref()).await?;
            select = select.filter(Column::OfferingId.is_in(ids));
        }
        if let Some(ids) = offering_ids_for_semester(&self.db, query.semester.as_deref()).await? {
            select = select.filter(Column::OfferingId.is_in(ids));
        }

        let select = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id);
        let (rows, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: schedule_details(&self.db, rows).await?,
            pagination,
        })
    }

    /// 更新排课；合并后的时段重新做冲突检测（排除自身）
    pub async fn update_schedule_impl(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>> {
        let txn = self.db.begin().await?;
        let Some(existing) = Schedules::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let offering_id = update.offering_id.unwrap_or(existing.offering_id);
        let classroom_id = update.classroom_id.unwrap_or(existing.classroom_id);
        let day = update.day_of_week.unwrap_or(existing.day_of_week);
        let start = update.start_time.unwrap_or_else(|| existing.start_time.clone());
        let end = update.end_time.unwrap_or_else(|| existing.end_time.clone());
        let weeks = update.weeks.unwrap_or_else(|| existing.weeks.clone());

        let slot = parse_slot(day, &start, &end, &weeks)?;
        check_schedule(&txn, offering_id, classroom_id, &slot, Some(id)).await?;

        let mut model: ActiveModel = existing.into();
        model.offering_id = Set(offering_id);
        model.classroom_id = Set(classroom_id);
        model.day_of_week = Set(slot.day_of_week);
        model.start_time = Set(clock(slot.start));
        model.end_time = Set(clock(slot.end));
        model.weeks = Set(weeks.trim().to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());
        let schedule = model.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(schedule.into_schedule()))
    }

    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = Schedules::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn find_schedule_conflicts_impl(
        &self,
        query: ScheduleConflictQuery,
    ) -> Result<Vec<String>> {
        detect_conflicts(&self.db, &query).await
    }

    /// 学生课表：已通过的选课
    pub async fn list_student_schedules_impl(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>> {
        let mut offering_ids: Vec<i64> = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::OfferingId)
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::Status.eq(EnrollmentStatus::Approved.as_str()))
            .into_tuple()
            .all(&self.db)
            .await?;
        if let Some(in_semester) =
            offering_ids_for_semester(&self.db, semester.as_deref()).await?
        {
            offering_ids.retain(|id| in_semester.contains(id));
        }
        self.schedules_for_offerings(offering_ids).await
    }

    /// 教师课表：本人任课的开课
    pub async fn list_teacher_schedules_impl(
        &self,
        teacher_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>> {
        let offering_ids = teacher_offering_ids(&self.db, teacher_id, semester.as_deref()).await?;
        self.schedules_for_offerings(offering_ids).await
    }

    /// 课程表视图：学期内的排课，按星期与开始时间排序
    pub async fn list_semester_schedules_impl(
        &self,
        semester: &str,
        teacher_id: Option<i64>,
        classroom_id: Option<i64>,
    ) -> Result<Vec<ScheduleDetail>> {
        let mut offerings = course_offerings::Entity::find()
            .select_only()
            .column(course_offerings::Column::Id)
            .filter(course_offerings::Column::Semester.eq(semester.trim()));
        if let Some(teacher_id) = teacher_id {
            offerings = offerings.filter(course_offerings::Column::TeacherId.eq(teacher_id));
        }
        let offering_ids: Vec<i64> = offerings.into_tuple().all(&self.db).await?;
        if offering_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut select = Schedules::find().filter(Column::OfferingId.is_in(offering_ids));
        if let Some(classroom_id) = classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }
        let rows = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        schedule_details(&self.db, rows).await
    }

    async fn schedules_for_offerings(&self, offering_ids: Vec<i64>) -> Result<Vec<ScheduleDetail>> {
        if offering_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = Schedules::find()
            .filter(Column::OfferingId.is_in(offering_ids))
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await?;
        schedule_details(&self.db, rows).await
    }
}
