mod common;

use common::*;
use school_admin_next::errors::SchoolSystemError;
use school_admin_next::models::classrooms::entities::{ClassroomStatus, ClassroomType};
use school_admin_next::models::classrooms::requests::CreateClassroomRequest;
use school_admin_next::models::course_offerings::requests::CreateOfferingRequest;
use school_admin_next::models::departments::requests::UpdateDepartmentRequest;
use school_admin_next::models::enrollments::entities::EnrollmentStatus;
use school_admin_next::models::grades::requests::RecordGradeRequest;
use school_admin_next::models::reward_punishments::entities::RecordKind;
use school_admin_next::models::reward_punishments::requests::CreateRewardPunishmentRequest;
use school_admin_next::models::roles::entities::SUPER_ADMIN;
use school_admin_next::models::schedules::entities::ScheduleConflictQuery;
use school_admin_next::models::schedules::requests::CreateScheduleRequest;
use school_admin_next::runtime::lifetime::startup::{seed_admin, seed_catalog};
use school_admin_next::utils::grading::build_grade_record;
use school_admin_next::utils::timetable::TimeSlot;

#[tokio::test]
async fn test_seed_is_idempotent() {
    let storage = setup_storage().await;
    let super_admin = seed_catalog(&storage).await.unwrap();
    let role = storage.get_role_by_code(SUPER_ADMIN).await.unwrap().unwrap();
    assert_eq!(super_admin, Some(role.id));

    seed_admin(&storage, super_admin).await.unwrap();
    seed_admin(&storage, super_admin).await.unwrap();
    assert_eq!(storage.count_users().await.unwrap(), 1);

    let admin = storage.get_user_by_username("admin").await.unwrap().unwrap();
    let authorities = storage.get_user_authorities(admin.id).await.unwrap();
    assert!(authorities.roles.iter().any(|r| r == SUPER_ADMIN));
}

#[tokio::test]
async fn test_enrollment_capacity_and_duplicates() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 1).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;
    let bob = create_student(&storage, "bob", school.dept.id).await;

    let pending = storage
        .create_enrollment(alice.id, school.offering.id, false)
        .await
        .unwrap();
    assert_eq!(pending.status, EnrollmentStatus::Pending);

    let dup = storage
        .create_enrollment(alice.id, school.offering.id, false)
        .await;
    assert!(matches!(dup, Err(SchoolSystemError::Conflict(_))));

    storage.approve_enrollment(pending.id, 1).await.unwrap();
    let offering = storage
        .get_offering_by_id(school.offering.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(offering.current_students, 1);

    // 名额已满
    let full = storage.create_enrollment(bob.id, school.offering.id, true).await;
    assert!(matches!(full, Err(SchoolSystemError::Conflict(_))));

    // 退课释放名额
    let withdrawn = storage.withdraw_enrollment(pending.id).await.unwrap();
    assert_eq!(withdrawn.status, EnrollmentStatus::Withdrawn);
    let offering = storage
        .get_offering_by_id(school.offering.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(offering.current_students, 0);

    let bob_enrollment = storage
        .create_enrollment(bob.id, school.offering.id, true)
        .await
        .unwrap();
    assert_eq!(bob_enrollment.status, EnrollmentStatus::Approved);
}

#[tokio::test]
async fn test_rejected_enrollment_cannot_be_approved() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 10).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;

    let enrollment = storage
        .create_enrollment(alice.id, school.offering.id, false)
        .await
        .unwrap();
    let rejected = storage
        .reject_enrollment(enrollment.id, 1, Some("先修课未通过".to_string()))
        .await
        .unwrap();
    assert_eq!(rejected.status, EnrollmentStatus::Rejected);

    let approve = storage.approve_enrollment(enrollment.id, 1).await;
    assert!(matches!(approve, Err(SchoolSystemError::Conflict(_))));

    // 驳回后可以重新申请
    storage
        .create_enrollment(alice.id, school.offering.id, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_grades_require_approved_enrollment() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 10).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;

    let enrollment = storage
        .create_enrollment(alice.id, school.offering.id, false)
        .await
        .unwrap();
    let record = build_grade_record(
        &RecordGradeRequest {
            usual_score: Some(80.0),
            exam_score: Some(90.0),
            ..Default::default()
        },
        0.3,
        school.teacher.user_id,
    )
    .unwrap();

    let early = storage.upsert_grade(enrollment.id, record.clone()).await;
    assert!(matches!(early, Err(SchoolSystemError::Conflict(_))));

    storage.approve_enrollment(enrollment.id, 1).await.unwrap();
    let grade = storage.upsert_grade(enrollment.id, record).await.unwrap();
    assert_eq!(grade.final_score, Some(87.0));
    assert_eq!(grade.letter_grade.as_deref(), Some("B"));

    // 再次录入覆盖原成绩
    let record = build_grade_record(
        &RecordGradeRequest {
            final_score: Some(55.0),
            ..Default::default()
        },
        0.3,
        school.teacher.user_id,
    )
    .unwrap();
    let updated = storage.upsert_grade(enrollment.id, record).await.unwrap();
    assert_eq!(updated.id, grade.id);
    assert_eq!(updated.grade_point, Some(0.0));

    let grades = storage.list_student_grades(alice.id, None).await.unwrap();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].course_code, "CS101");
    assert_eq!(grades[0].credits, 3.0);
}

#[tokio::test]
async fn test_department_constraints() {
    let storage = setup_storage().await;
    let root = create_department(&storage, "ENG").await;
    let child = storage
        .create_department(
            school_admin_next::models::departments::requests::CreateDepartmentRequest {
                dept_name: "软件系".to_string(),
                dept_code: "SE".to_string(),
                parent_id: Some(root.id),
                description: None,
                status: None,
            },
        )
        .await
        .unwrap();

    let cycle = storage
        .update_department(
            root.id,
            UpdateDepartmentRequest {
                parent_id: Some(Some(child.id)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(cycle, Err(SchoolSystemError::Validation(_))));

    let blocked = storage.delete_department(root.id).await;
    assert!(matches!(blocked, Err(SchoolSystemError::Conflict(_))));

    assert!(storage.delete_department(child.id).await.unwrap());
    assert!(storage.delete_department(root.id).await.unwrap());
    assert!(!storage.delete_department(root.id).await.unwrap());
}

#[tokio::test]
async fn test_course_delete_blocked_by_offering() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 10).await;

    let blocked = storage.delete_course(school.course.id).await;
    assert!(matches!(blocked, Err(SchoolSystemError::Conflict(_))));

    assert!(storage.delete_offering(school.offering.id).await.unwrap());
    assert!(storage.delete_course(school.course.id).await.unwrap());
}

#[tokio::test]
async fn test_super_admin_role_is_protected() {
    let storage = setup_storage().await;
    let role = role_id(&storage, SUPER_ADMIN).await;
    let result = storage.delete_role(role).await;
    assert!(matches!(result, Err(SchoolSystemError::Conflict(_))));
}

#[tokio::test]
async fn test_schedule_conflicts_and_available_rooms() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 60).await;
    let other_course = create_course(&storage, "CS102", 2.0, school.dept.id).await;
    let other_offering =
        create_offering(&storage, other_course.id, school.teacher.id, 60).await;

    let mut rooms = Vec::new();
    for (room_no, capacity) in [("101", 60), ("102", 120)] {
        let room = storage
            .create_classroom(CreateClassroomRequest {
                room_no: room_no.to_string(),
                building: "一教".to_string(),
                floor: Some(1),
                capacity,
                room_type: ClassroomType::Multimedia,
                equipment: vec!["投影仪".to_string()],
                status: Some(ClassroomStatus::Available),
            })
            .await
            .unwrap();
        rooms.push(room);
    }

    let schedule = storage
        .create_schedule(CreateScheduleRequest {
            offering_id: school.offering.id,
            classroom_id: rooms[0].id,
            day_of_week: 1,
            start_time: "08:00".to_string(),
            end_time: "09:40".to_string(),
            weeks: "1-16".to_string(),
        })
        .await
        .unwrap();

    // 同一教师在重叠时段上另一门课
    let clash = storage
        .create_schedule(CreateScheduleRequest {
            offering_id: other_offering.id,
            classroom_id: rooms[1].id,
            day_of_week: 1,
            start_time: "09:00".to_string(),
            end_time: "10:40".to_string(),
            weeks: "8-12".to_string(),
        })
        .await;
    assert!(matches!(clash, Err(SchoolSystemError::Conflict(_))));

    // 周次不重叠时可以共用教室
    storage
        .create_schedule(CreateScheduleRequest {
            offering_id: other_offering.id,
            classroom_id: rooms[0].id,
            day_of_week: 1,
            start_time: "08:00".to_string(),
            end_time: "09:40".to_string(),
            weeks: "17-18".to_string(),
        })
        .await
        .unwrap();

    let slot = TimeSlot::parse(1, "08:30", "09:00", "3").unwrap();
    let conflicts = storage
        .find_schedule_conflicts(ScheduleConflictQuery {
            slot: slot.clone(),
            classroom_id: Some(rooms[0].id),
            teacher_id: None,
            semester: None,
            exclude_schedule_id: None,
        })
        .await
        .unwrap();
    assert_eq!(conflicts.len(), 1);

    let excluded = storage
        .find_schedule_conflicts(ScheduleConflictQuery {
            slot: slot.clone(),
            classroom_id: Some(rooms[0].id),
            teacher_id: None,
            semester: None,
            exclude_schedule_id: Some(schedule.id),
        })
        .await
        .unwrap();
    assert!(excluded.is_empty());

    let available = storage
        .list_available_classrooms(slot, None, Some(50), None)
        .await
        .unwrap();
    let ids: Vec<i64> = available.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![rooms[1].id]);
}

#[tokio::test]
async fn test_user_delete_keeps_enrollments_and_seats() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 10).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;
    let bob = create_student(&storage, "bob", school.dept.id).await;

    let enrollment = storage
        .create_enrollment(alice.id, school.offering.id, true)
        .await
        .unwrap();

    let blocked = storage.delete_user(alice.user_id).await;
    assert!(matches!(blocked, Err(SchoolSystemError::Conflict(_))));
    assert!(storage.get_user_by_id(alice.user_id).await.unwrap().is_some());
    assert!(storage.get_enrollment_by_id(enrollment.id).await.unwrap().is_some());
    let offering = storage
        .get_offering_by_id(school.offering.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(offering.current_students, 1);

    // 退课后选课记录仍在，仍然拒绝
    storage.withdraw_enrollment(enrollment.id).await.unwrap();
    let blocked = storage.delete_user(alice.user_id).await;
    assert!(matches!(blocked, Err(SchoolSystemError::Conflict(_))));

    // 仍有开课的教师
    let blocked = storage.delete_user(school.teacher.user_id).await;
    assert!(matches!(blocked, Err(SchoolSystemError::Conflict(_))));

    // 没有选课记录的学生可以删除，档案随之删除
    assert!(storage.delete_user(bob.user_id).await.unwrap());
    assert!(storage.get_student_detail(bob.id).await.unwrap().is_none());
    assert!(!storage.delete_user(bob.user_id).await.unwrap());
}

#[tokio::test]
async fn test_transcript_orders_newest_semester_first() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 10).await;
    let alice = create_student(&storage, "alice", school.dept.id).await;

    let mut offerings = vec![school.offering.clone()];
    for (code, semester) in [("AI200", "2025-2026-1"), ("CS300", "2025-2026-1")] {
        let course = create_course(&storage, code, 2.0, school.dept.id).await;
        let offering = storage
            .create_offering(CreateOfferingRequest {
                course_id: course.id,
                teacher_id: school.teacher.id,
                semester: semester.to_string(),
                max_students: Some(10),
                status: Some(true),
            })
            .await
            .unwrap();
        offerings.push(offering);
    }

    // 按与期望相反的顺序录入
    for offering in offerings.iter().rev() {
        let enrollment = storage
            .create_enrollment(alice.id, offering.id, true)
            .await
            .unwrap();
        let record = build_grade_record(
            &RecordGradeRequest {
                final_score: Some(75.0),
                ..Default::default()
            },
            0.3,
            school.teacher.user_id,
        )
        .unwrap();
        storage.upsert_grade(enrollment.id, record).await.unwrap();
    }

    let grades = storage.list_student_grades(alice.id, None).await.unwrap();
    let order: Vec<(&str, &str)> = grades
        .iter()
        .map(|g| (g.semester.as_str(), g.course_code.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2025-2026-1", "AI200"),
            ("2025-2026-1", "CS300"),
            ("2024-2025-1", "CS101"),
        ]
    );

    let filtered = storage
        .list_student_grades(alice.id, Some("2024-2025-1".to_string()))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
}

#[tokio::test]
async fn test_semester_schedules_filters() {
    let storage = setup_storage().await;
    let school = setup_school(&storage, 60).await;
    let other_teacher = create_teacher(&storage, "teacher02", school.dept.id).await;
    let other_course = create_course(&storage, "CS102", 2.0, school.dept.id).await;
    let other_offering = create_offering(&storage, other_course.id, other_teacher.id, 60).await;

    let room = storage
        .create_classroom(CreateClassroomRequest {
            room_no: "201".to_string(),
            building: "二教".to_string(),
            floor: Some(2),
            capacity: 80,
            room_type: ClassroomType::Multimedia,
            equipment: Vec::new(),
            status: Some(ClassroomStatus::Available),
        })
        .await
        .unwrap();

    for (offering_id, day) in [(school.offering.id, 3), (other_offering.id, 1)] {
        storage
            .create_schedule(CreateScheduleRequest {
                offering_id,
                classroom_id: room.id,
                day_of_week: day,
                start_time: "10:00".to_string(),
                end_time: "11:40".to_string(),
                weeks: "1-16".to_string(),
            })
            .await
            .unwrap();
    }

    let all = storage
        .list_semester_schedules("2024-2025-1", None, None)
        .await
        .unwrap();
    let days: Vec<i32> = all.iter().map(|s| s.schedule.day_of_week).collect();
    assert_eq!(days, vec![1, 3]);

    let mine = storage
        .list_semester_schedules("2024-2025-1", Some(school.teacher.id), Some(room.id))
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].course_code, "CS101");

    let other_term = storage
        .list_semester_schedules("2030-2031-1", None, None)
        .await
        .unwrap();
    assert!(other_term.is_empty());
}

#[tokio::test]
async fn test_reward_punishment_categories_are_distinct() {
    let storage = setup_storage().await;
    let dept = create_department(&storage, "CS").await;
    let alice = create_student(&storage, "alice", dept.id).await;

    for (kind, category) in [
        (RecordKind::Reward, "奖学金"),
        (RecordKind::Reward, "奖学金"),
        (RecordKind::Punishment, "警告"),
    ] {
        storage
            .create_reward_punishment(
                CreateRewardPunishmentRequest {
                    student_id: alice.id,
                    kind,
                    category: category.to_string(),
                    description: None,
                    occur_date: chrono::NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
                },
                1,
            )
            .await
            .unwrap();
    }

    let categories = storage.list_reward_punishment_categories().await.unwrap();
    assert_eq!(categories, vec!["奖学金".to_string(), "警告".to_string()]);
}
