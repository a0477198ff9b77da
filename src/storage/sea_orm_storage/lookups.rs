//! 批量按 id 加载关联数据，并组装带名称的详情视图

use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Select};

use crate::entity;
use crate::errors::Result;
use crate::models::PaginationInfo;
use crate::models::common::PaginationQuery;
use crate::models::course_offerings::entities::OfferingDetail;
use crate::models::enrollments::entities::EnrollmentDetail;
use crate::models::grades::entities::GradeDetail;
use crate::models::reward_punishments::entities::RewardPunishmentDetail;
use crate::models::schedules::entities::ScheduleDetail;
use crate::models::student_status::entities::StudentStatusDetail;
use crate::models::students::entities::StudentDetail;
use crate::models::teachers::entities::TeacherDetail;

/// 分页查询，返回当前页数据与分页信息
pub(super) async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    pagination: &PaginationQuery,
) -> Result<(Vec<E::Model>, PaginationInfo)>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let (page, size) = pagination.normalized();
    let paginator = select.paginate(db, size);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page - 1).await?;
    Ok((items, PaginationInfo::new(page, size, total)))
}

macro_rules! lookup_by_ids {
    ($fn_name:ident, $module:ident) => {
        pub(super) async fn $fn_name<C: ConnectionTrait>(
            db: &C,
            ids: impl IntoIterator<Item = i64>,
        ) -> Result<HashMap<i64, entity::$module::Model>> {
            let ids: HashSet<i64> = ids.into_iter().collect();
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            let models = entity::$module::Entity::find()
                .filter(entity::$module::Column::Id.is_in(ids))
                .all(db)
                .await?;
            Ok(models.into_iter().map(|m| (m.id, m)).collect())
        }
    };
}

lookup_by_ids!(users_by_ids, users);
lookup_by_ids!(departments_by_ids, departments);
lookup_by_ids!(teachers_by_ids, teachers);
lookup_by_ids!(students_by_ids, students);
lookup_by_ids!(courses_by_ids, courses);
lookup_by_ids!(offerings_by_ids, course_offerings);
lookup_by_ids!(enrollments_by_ids, enrollments);
lookup_by_ids!(classrooms_by_ids, classrooms);

fn real_name(users: &HashMap<i64, entity::users::Model>, user_id: i64) -> String {
    users
        .get(&user_id)
        .map(|u| u.real_name.clone())
        .unwrap_or_default()
}

pub(super) async fn teacher_details<C: ConnectionTrait>(
    db: &C,
    teachers: Vec<entity::teachers::Model>,
) -> Result<Vec<TeacherDetail>> {
    let users = users_by_ids(db, teachers.iter().map(|t| t.user_id)).await?;
    let depts = departments_by_ids(db, teachers.iter().filter_map(|t| t.dept_id)).await?;

    Ok(teachers
        .into_iter()
        .map(|t| {
            let user = users.get(&t.user_id);
            let dept_name = t
                .dept_id
                .and_then(|id| depts.get(&id))
                .map(|d| d.dept_name.clone());
            TeacherDetail {
                real_name: user.map(|u| u.real_name.clone()).unwrap_or_default(),
                username: user.map(|u| u.username.clone()).unwrap_or_default(),
                email: user.map(|u| u.email.clone()).unwrap_or_default(),
                dept_name,
                teacher: t.into_teacher(),
            }
        })
        .collect())
}

pub(super) async fn student_details<C: ConnectionTrait>(
    db: &C,
    students: Vec<entity::students::Model>,
) -> Result<Vec<StudentDetail>> {
    let users = users_by_ids(db, students.iter().map(|s| s.user_id)).await?;
    let depts = departments_by_ids(db, students.iter().filter_map(|s| s.dept_id)).await?;

    Ok(students
        .into_iter()
        .map(|s| {
            let user = users.get(&s.user_id);
            let dept_name = s
                .dept_id
                .and_then(|id| depts.get(&id))
                .map(|d| d.dept_name.clone());
            StudentDetail {
                real_name: user.map(|u| u.real_name.clone()).unwrap_or_default(),
                username: user.map(|u| u.username.clone()).unwrap_or_default(),
                email: user.map(|u| u.email.clone()).unwrap_or_default(),
                dept_name,
                student: s.into_student(),
            }
        })
        .collect())
}

/// 开课 -> (课程, 教师姓名, 教师工号)
struct OfferingContext {
    offerings: HashMap<i64, entity::course_offerings::Model>,
    courses: HashMap<i64, entity::courses::Model>,
    teachers: HashMap<i64, entity::teachers::Model>,
    teacher_users: HashMap<i64, entity::users::Model>,
}

impl OfferingContext {
    async fn load<C: ConnectionTrait>(
        db: &C,
        offering_ids: impl IntoIterator<Item = i64>,
    ) -> Result<Self> {
        let offerings = offerings_by_ids(db, offering_ids).await?;
        let courses = courses_by_ids(db, offerings.values().map(|o| o.course_id)).await?;
        let teachers = teachers_by_ids(db, offerings.values().map(|o| o.teacher_id)).await?;
        let teacher_users = users_by_ids(db, teachers.values().map(|t| t.user_id)).await?;
        Ok(Self {
            offerings,
            courses,
            teachers,
            teacher_users,
        })
    }

    fn course(&self, offering_id: i64) -> Option<&entity::courses::Model> {
        self.offerings
            .get(&offering_id)
            .and_then(|o| self.courses.get(&o.course_id))
    }

    fn teacher_name(&self, teacher_id: i64) -> String {
        self.teachers
            .get(&teacher_id)
            .map(|t| real_name(&self.teacher_users, t.user_id))
            .unwrap_or_default()
    }

    fn semester(&self, offering_id: i64) -> String {
        self.offerings
            .get(&offering_id)
            .map(|o| o.semester.clone())
            .unwrap_or_default()
    }
}

pub(super) async fn offering_details<C: ConnectionTrait>(
    db: &C,
    offerings: Vec<entity::course_offerings::Model>,
) -> Result<Vec<OfferingDetail>> {
    let ctx = OfferingContext::load(db, offerings.iter().map(|o| o.id)).await?;

    Ok(offerings
        .into_iter()
        .map(|o| {
            let course = ctx.courses.get(&o.course_id);
            let teacher_no = ctx
                .teachers
                .get(&o.teacher_id)
                .map(|t| t.teacher_no.clone())
                .unwrap_or_default();
            OfferingDetail {
                course_code: course.map(|c| c.course_code.clone()).unwrap_or_default(),
                course_name: course.map(|c| c.course_name.clone()).unwrap_or_default(),
                credits: course.map(|c| c.credits).unwrap_or_default(),
                teacher_name: ctx.teacher_name(o.teacher_id),
                teacher_no,
                offering: o.into_offering(),
            }
        })
        .collect())
}

pub(super) async fn enrollment_details<C: ConnectionTrait>(
    db: &C,
    enrollments: Vec<entity::enrollments::Model>,
) -> Result<Vec<EnrollmentDetail>> {
    let ctx = OfferingContext::load(db, enrollments.iter().map(|e| e.offering_id)).await?;
    let students = students_by_ids(db, enrollments.iter().map(|e| e.student_id)).await?;
    let student_users = users_by_ids(db, students.values().map(|s| s.user_id)).await?;

    Ok(enrollments
        .into_iter()
        .map(|e| {
            let student = students.get(&e.student_id);
            let course = ctx.course(e.offering_id);
            let teacher_name = ctx
                .offerings
                .get(&e.offering_id)
                .map(|o| ctx.teacher_name(o.teacher_id))
                .unwrap_or_default();
            EnrollmentDetail {
                student_no: student.map(|s| s.student_no.clone()).unwrap_or_default(),
                student_name: student
                    .map(|s| real_name(&student_users, s.user_id))
                    .unwrap_or_default(),
                course_id: course.map(|c| c.id).unwrap_or_default(),
                course_code: course.map(|c| c.course_code.clone()).unwrap_or_default(),
                course_name: course.map(|c| c.course_name.clone()).unwrap_or_default(),
                credits: course.map(|c| c.credits).unwrap_or_default(),
                semester: ctx.semester(e.offering_id),
                teacher_name,
                enrollment: e.into_enrollment(),
            }
        })
        .collect())
}

pub(super) async fn grade_details<C: ConnectionTrait>(
    db: &C,
    grades: Vec<entity::grades::Model>,
) -> Result<Vec<GradeDetail>> {
    let enrollments = enrollments_by_ids(db, grades.iter().map(|g| g.enrollment_id)).await?;
    let ctx = OfferingContext::load(db, enrollments.values().map(|e| e.offering_id)).await?;
    let students = students_by_ids(db, enrollments.values().map(|e| e.student_id)).await?;
    let student_users = users_by_ids(db, students.values().map(|s| s.user_id)).await?;

    Ok(grades
        .into_iter()
        .filter_map(|g| {
            let enrollment = enrollments.get(&g.enrollment_id)?;
            let student = students.get(&enrollment.student_id);
            let course = ctx.course(enrollment.offering_id);
            Some(GradeDetail {
                student_id: enrollment.student_id,
                student_no: student.map(|s| s.student_no.clone()).unwrap_or_default(),
                student_name: student
                    .map(|s| real_name(&student_users, s.user_id))
                    .unwrap_or_default(),
                offering_id: enrollment.offering_id,
                course_code: course.map(|c| c.course_code.clone()).unwrap_or_default(),
                course_name: course.map(|c| c.course_name.clone()).unwrap_or_default(),
                credits: course.map(|c| c.credits).unwrap_or_default(),
                semester: ctx.semester(enrollment.offering_id),
                grade: g.into_grade(),
            })
        })
        .collect())
}

pub(super) async fn schedule_details<C: ConnectionTrait>(
    db: &C,
    schedules: Vec<entity::schedules::Model>,
) -> Result<Vec<ScheduleDetail>> {
    let ctx = OfferingContext::load(db, schedules.iter().map(|s| s.offering_id)).await?;
    let rooms = classrooms_by_ids(db, schedules.iter().map(|s| s.classroom_id)).await?;

    Ok(schedules
        .into_iter()
        .map(|s| {
            let course = ctx.course(s.offering_id);
            let teacher_id = ctx
                .offerings
                .get(&s.offering_id)
                .map(|o| o.teacher_id)
                .unwrap_or_default();
            let room = rooms.get(&s.classroom_id);
            ScheduleDetail {
                course_code: course.map(|c| c.course_code.clone()).unwrap_or_default(),
                course_name: course.map(|c| c.course_name.clone()).unwrap_or_default(),
                semester: ctx.semester(s.offering_id),
                teacher_id,
                teacher_name: ctx.teacher_name(teacher_id),
                room_no: room.map(|r| r.room_no.clone()).unwrap_or_default(),
                building: room.map(|r| r.building.clone()).unwrap_or_default(),
                schedule: s.into_schedule(),
            }
        })
        .collect())
}

/// 学生学号、姓名与经办人姓名
struct StudentRecordContext {
    students: HashMap<i64, entity::students::Model>,
    users: HashMap<i64, entity::users::Model>,
}

impl StudentRecordContext {
    async fn load<C: ConnectionTrait>(
        db: &C,
        student_ids: impl IntoIterator<Item = i64>,
        handler_ids: impl IntoIterator<Item = i64>,
    ) -> Result<Self> {
        let students = students_by_ids(db, student_ids).await?;
        let user_ids: Vec<i64> = students
            .values()
            .map(|s| s.user_id)
            .chain(handler_ids)
            .collect();
        let users = users_by_ids(db, user_ids).await?;
        Ok(Self { students, users })
    }

    fn student(&self, student_id: i64) -> (String, String) {
        self.students
            .get(&student_id)
            .map(|s| (s.student_no.clone(), real_name(&self.users, s.user_id)))
            .unwrap_or_default()
    }

    fn handler_name(&self, handler_id: Option<i64>) -> Option<String> {
        handler_id
            .and_then(|id| self.users.get(&id))
            .map(|u| u.real_name.clone())
    }
}

pub(super) async fn student_status_details<C: ConnectionTrait>(
    db: &C,
    records: Vec<entity::student_status::Model>,
) -> Result<Vec<StudentStatusDetail>> {
    let ctx = StudentRecordContext::load(
        db,
        records.iter().map(|r| r.student_id),
        records.iter().filter_map(|r| r.handler_id),
    )
    .await?;

    Ok(records
        .into_iter()
        .map(|r| {
            let (student_no, student_name) = ctx.student(r.student_id);
            StudentStatusDetail {
                student_no,
                student_name,
                handler_name: ctx.handler_name(r.handler_id),
                record: r.into_record(),
            }
        })
        .collect())
}

pub(super) async fn reward_punishment_details<C: ConnectionTrait>(
    db: &C,
    records: Vec<entity::reward_punishments::Model>,
) -> Result<Vec<RewardPunishmentDetail>> {
    let ctx = StudentRecordContext::load(
        db,
        records.iter().map(|r| r.student_id),
        records.iter().filter_map(|r| r.handler_id),
    )
    .await?;

    Ok(records
        .into_iter()
        .map(|r| {
            let (student_no, student_name) = ctx.student(r.student_id);
            RewardPunishmentDetail {
                student_no,
                student_name,
                handler_name: ctx.handler_name(r.handler_id),
                record: r.into_record(),
            }
        })
        .collect())
}

/// 指定学期的开课 id；`None` 表示不过滤
pub(super) async fn offering_ids_for_semester<C: ConnectionTrait>(
    db: &C,
    semester: Option<&str>,
) -> Result<Option<Vec<i64>>> {
    let Some(semester) = semester.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    let ids = entity::course_offerings::Entity::find()
        .filter(entity::course_offerings::Column::Semester.eq(semester.trim()))
        .all(db)
        .await?
        .into_iter()
        .map(|o| o.id)
        .collect();
    Ok(Some(ids))
}

/// 按学号或姓名关键字匹配的学生 id
pub(super) async fn student_ids_matching<C: ConnectionTrait>(
    db: &C,
    search: &str,
) -> Result<Vec<i64>> {
    use crate::utils::sql::contains_escaped;
    use sea_orm::{Condition, JoinType, QuerySelect, RelationTrait};

    let ids = entity::students::Entity::find()
        .join(JoinType::InnerJoin, entity::students::Relation::User.def())
        .filter(
            Condition::any()
                .add(contains_escaped(entity::students::Column::StudentNo, search))
                .add(contains_escaped(entity::users::Column::RealName, search)),
        )
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    Ok(ids)
}
