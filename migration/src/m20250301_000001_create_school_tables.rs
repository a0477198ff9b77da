use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

fn index<T, C>(name: &str, table: T, col: C) -> IndexCreateStatement
where
    T: IntoTableRef,
    C: IntoIndexColumn,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(col)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk(Users::Id))
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::RealName).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 角色表
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(pk(Roles::Id))
                    .col(ColumnDef::new(Roles::RoleName).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::RoleCode).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::Description).text().null())
                    .col(ColumnDef::new(Roles::Status).boolean().not_null().default(true))
                    .col(timestamp(Roles::CreatedAt))
                    .col(timestamp(Roles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 权限表
        manager
            .create_table(
                Table::create()
                    .table(Permissions::Table)
                    .if_not_exists()
                    .col(pk(Permissions::Id))
                    .col(ColumnDef::new(Permissions::PermissionName).string().not_null())
                    .col(
                        ColumnDef::new(Permissions::PermissionCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Permissions::Module).string().not_null())
                    .col(ColumnDef::new(Permissions::Description).text().null())
                    .col(
                        ColumnDef::new(Permissions::Status)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 角色-权限关联表
        manager
            .create_table(
                Table::create()
                    .table(RolePermissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RolePermissions::RoleId).big_integer().not_null())
                    .col(
                        ColumnDef::new(RolePermissions::PermissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RolePermissions::RoleId)
                            .col(RolePermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RolePermissions::Table, RolePermissions::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RolePermissions::Table, RolePermissions::PermissionId)
                            .to(Permissions::Table, Permissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 用户-角色关联表
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserRoles::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserRoles::RoleId).big_integer().not_null())
                    .primary_key(Index::create().col(UserRoles::UserId).col(UserRoles::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 部门表（parent_id 自引用，删除前由业务层检查子部门）
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(pk(Departments::Id))
                    .col(ColumnDef::new(Departments::DeptName).string().not_null())
                    .col(
                        ColumnDef::new(Departments::DeptCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::ParentId).big_integer().null())
                    .col(ColumnDef::new(Departments::Description).text().null())
                    .col(
                        ColumnDef::new(Departments::Status)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp(Departments::CreatedAt))
                    .col(timestamp(Departments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(pk(Teachers::Id))
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::TeacherNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::DeptId).big_integer().null())
                    .col(ColumnDef::new(Teachers::Title).string().null())
                    .col(ColumnDef::new(Teachers::HireDate).date().null())
                    .col(ColumnDef::new(Teachers::Status).boolean().not_null().default(true))
                    .col(timestamp(Teachers::CreatedAt))
                    .col(timestamp(Teachers::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::DeptId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk(Students::Id))
                    .col(
                        ColumnDef::new(Students::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::DeptId).big_integer().null())
                    .col(ColumnDef::new(Students::ClassName).string().null())
                    .col(ColumnDef::new(Students::Grade).integer().null())
                    .col(ColumnDef::new(Students::EnrollmentYear).integer().null())
                    .col(ColumnDef::new(Students::GraduationYear).integer().null())
                    .col(timestamp(Students::CreatedAt))
                    .col(timestamp(Students::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::DeptId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk(Courses::Id))
                    .col(
                        ColumnDef::new(Courses::CourseCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseName).string().not_null())
                    .col(ColumnDef::new(Courses::DeptId).big_integer().null())
                    .col(ColumnDef::new(Courses::Credits).double().not_null())
                    .col(ColumnDef::new(Courses::Hours).integer().not_null())
                    .col(ColumnDef::new(Courses::CourseType).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Status).boolean().not_null().default(true))
                    .col(timestamp(Courses::CreatedAt))
                    .col(timestamp(Courses::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::DeptId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 开课表
        manager
            .create_table(
                Table::create()
                    .table(CourseOfferings::Table)
                    .if_not_exists()
                    .col(pk(CourseOfferings::Id))
                    .col(ColumnDef::new(CourseOfferings::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(CourseOfferings::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(CourseOfferings::Semester).string().not_null())
                    .col(
                        ColumnDef::new(CourseOfferings::MaxStudents)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::CurrentStudents)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CourseOfferings::Status)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp(CourseOfferings::CreatedAt))
                    .col(timestamp(CourseOfferings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseOfferings::Table, CourseOfferings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseOfferings::Table, CourseOfferings::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(pk(Enrollments::Id))
                    .col(ColumnDef::new(Enrollments::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::OfferingId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::Status).string().not_null())
                    .col(ColumnDef::new(Enrollments::Reason).text().null())
                    .col(timestamp(Enrollments::EnrolledAt))
                    .col(ColumnDef::new(Enrollments::ReviewedAt).big_integer().null())
                    .col(ColumnDef::new(Enrollments::ReviewedBy).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::OfferingId)
                            .to(CourseOfferings::Table, CourseOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 成绩表，每条选课最多一条成绩
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(pk(Grades::Id))
                    .col(
                        ColumnDef::new(Grades::EnrollmentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Grades::UsualScore).double().null())
                    .col(ColumnDef::new(Grades::ExamScore).double().null())
                    .col(ColumnDef::new(Grades::FinalScore).double().null())
                    .col(ColumnDef::new(Grades::GradePoint).double().null())
                    .col(ColumnDef::new(Grades::LetterGrade).string().null())
                    .col(ColumnDef::new(Grades::RecordedBy).big_integer().null())
                    .col(timestamp(Grades::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教室表，equipment 以 JSON 数组文本存储
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(pk(Classrooms::Id))
                    .col(
                        ColumnDef::new(Classrooms::RoomNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classrooms::Building).string().not_null())
                    .col(ColumnDef::new(Classrooms::Floor).integer().null())
                    .col(ColumnDef::new(Classrooms::Capacity).integer().not_null())
                    .col(ColumnDef::new(Classrooms::RoomType).string().not_null())
                    .col(ColumnDef::new(Classrooms::Equipment).text().not_null())
                    .col(ColumnDef::new(Classrooms::Status).string().not_null())
                    .col(timestamp(Classrooms::CreatedAt))
                    .col(timestamp(Classrooms::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 排课表
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(pk(Schedules::Id))
                    .col(ColumnDef::new(Schedules::OfferingId).big_integer().not_null())
                    .col(ColumnDef::new(Schedules::ClassroomId).big_integer().not_null())
                    .col(ColumnDef::new(Schedules::DayOfWeek).integer().not_null())
                    .col(ColumnDef::new(Schedules::StartTime).string().not_null())
                    .col(ColumnDef::new(Schedules::EndTime).string().not_null())
                    .col(ColumnDef::new(Schedules::Weeks).string().not_null())
                    .col(timestamp(Schedules::CreatedAt))
                    .col(timestamp(Schedules::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::OfferingId)
                            .to(CourseOfferings::Table, CourseOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 学籍异动表
        manager
            .create_table(
                Table::create()
                    .table(StudentStatus::Table)
                    .if_not_exists()
                    .col(pk(StudentStatus::Id))
                    .col(ColumnDef::new(StudentStatus::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(StudentStatus::StatusType).string().not_null())
                    .col(ColumnDef::new(StudentStatus::EffectiveDate).date().not_null())
                    .col(ColumnDef::new(StudentStatus::EndDate).date().null())
                    .col(ColumnDef::new(StudentStatus::Reason).text().null())
                    .col(ColumnDef::new(StudentStatus::HandlerId).big_integer().null())
                    .col(timestamp(StudentStatus::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentStatus::Table, StudentStatus::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 奖惩记录表
        manager
            .create_table(
                Table::create()
                    .table(RewardPunishments::Table)
                    .if_not_exists()
                    .col(pk(RewardPunishments::Id))
                    .col(
                        ColumnDef::new(RewardPunishments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RewardPunishments::Kind).string().not_null())
                    .col(ColumnDef::new(RewardPunishments::Category).string().not_null())
                    .col(ColumnDef::new(RewardPunishments::Description).text().null())
                    .col(ColumnDef::new(RewardPunishments::OccurDate).date().not_null())
                    .col(
                        ColumnDef::new(RewardPunishments::HandlerId)
                            .big_integer()
                            .null(),
                    )
                    .col(timestamp(RewardPunishments::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(RewardPunishments::Table, RewardPunishments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        let indexes = [
            index("idx_users_status", Users::Table, Users::Status),
            index("idx_departments_parent_id", Departments::Table, Departments::ParentId),
            index("idx_teachers_dept_id", Teachers::Table, Teachers::DeptId),
            index("idx_students_dept_id", Students::Table, Students::DeptId),
            index("idx_courses_dept_id", Courses::Table, Courses::DeptId),
            index(
                "idx_course_offerings_course_id",
                CourseOfferings::Table,
                CourseOfferings::CourseId,
            ),
            index(
                "idx_course_offerings_teacher_id",
                CourseOfferings::Table,
                CourseOfferings::TeacherId,
            ),
            index(
                "idx_course_offerings_semester",
                CourseOfferings::Table,
                CourseOfferings::Semester,
            ),
            index("idx_enrollments_student_id", Enrollments::Table, Enrollments::StudentId),
            index("idx_enrollments_offering_id", Enrollments::Table, Enrollments::OfferingId),
            index("idx_schedules_offering_id", Schedules::Table, Schedules::OfferingId),
            index("idx_schedules_classroom_id", Schedules::Table, Schedules::ClassroomId),
            index("idx_schedules_day_of_week", Schedules::Table, Schedules::DayOfWeek),
            index(
                "idx_student_status_student_id",
                StudentStatus::Table,
                StudentStatus::StudentId,
            ),
            index(
                "idx_reward_punishments_student_id",
                RewardPunishments::Table,
                RewardPunishments::StudentId,
            ),
        ];
        for statement in indexes {
            manager.create_index(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(RewardPunishments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentStatus::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schedules::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseOfferings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RolePermissions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Permissions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    RealName,
    Phone,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Roles {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    RoleName,
    RoleCode,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Permissions {
    #[sea_orm(iden = "permissions")]
    Table,
    Id,
    PermissionName,
    PermissionCode,
    Module,
    Description,
    Status,
}

#[derive(DeriveIden)]
enum RolePermissions {
    #[sea_orm(iden = "role_permissions")]
    Table,
    RoleId,
    PermissionId,
}

#[derive(DeriveIden)]
enum UserRoles {
    #[sea_orm(iden = "user_roles")]
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    DeptName,
    DeptCode,
    ParentId,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    TeacherNo,
    DeptId,
    Title,
    HireDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    StudentNo,
    DeptId,
    ClassName,
    Grade,
    EnrollmentYear,
    GraduationYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    CourseCode,
    CourseName,
    DeptId,
    Credits,
    Hours,
    CourseType,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseOfferings {
    #[sea_orm(iden = "course_offerings")]
    Table,
    Id,
    CourseId,
    TeacherId,
    Semester,
    MaxStudents,
    CurrentStudents,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentId,
    OfferingId,
    Status,
    Reason,
    EnrolledAt,
    ReviewedAt,
    ReviewedBy,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    EnrollmentId,
    UsualScore,
    ExamScore,
    FinalScore,
    GradePoint,
    LetterGrade,
    RecordedBy,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Classrooms {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
    RoomNo,
    Building,
    Floor,
    Capacity,
    RoomType,
    Equipment,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Schedules {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    OfferingId,
    ClassroomId,
    DayOfWeek,
    StartTime,
    EndTime,
    Weeks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentStatus {
    #[sea_orm(iden = "student_status")]
    Table,
    Id,
    StudentId,
    StatusType,
    EffectiveDate,
    EndDate,
    Reason,
    HandlerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RewardPunishments {
    #[sea_orm(iden = "reward_punishments")]
    Table,
    Id,
    StudentId,
    Kind,
    Category,
    Description,
    OccurDate,
    HandlerId,
    CreatedAt,
}
