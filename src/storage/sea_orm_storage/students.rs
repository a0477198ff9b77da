use super::SeaOrmStorage;
use super::lookups::{fetch_page, student_details};
use super::teachers::{ensure_department_exists, ensure_user_exists};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Relation};
use crate::entity::{enrollments, users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    students::{
        entities::{Student, StudentDetail},
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::sql::contains_escaped;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        ensure_user_exists(&self.db, req.user_id).await?;
        ensure_department_exists(&self.db, req.dept_id).await?;

        let now = chrono::Utc::now().timestamp();
        let student = ActiveModel {
            user_id: Set(req.user_id),
            student_no: Set(req.student_no),
            dept_id: Set(req.dept_id),
            class_name: Set(req.class_name),
            grade: Set(req.grade),
            enrollment_year: Set(req.enrollment_year),
            graduation_year: Set(req.graduation_year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(student.into_student())
    }

    pub async fn get_student_detail_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let Some(student) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };
        Ok(student_details(&self.db, vec![student]).await?.pop())
    }

    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        let Some(student) = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(student_details(&self.db, vec![student]).await?.pop())
    }

    /// 分页列出学生，关键字匹配学号或姓名
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse> {
        let mut select = Students::find().join(JoinType::InnerJoin, Relation::User.def());

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(contains_escaped(Column::StudentNo, search))
                    .add(contains_escaped(users::Column::RealName, search)),
            );
        }
        if let Some(dept_id) = query.dept_id {
            select = select.filter(Column::DeptId.eq(dept_id));
        }
        if let Some(ref class_name) = query.class_name
            && !class_name.trim().is_empty()
        {
            select = select.filter(contains_escaped(Column::ClassName, class_name));
        }
        if let Some(grade) = query.grade {
            select = select.filter(Column::Grade.eq(grade));
        }

        let (students, pagination) = fetch_page(
            &self.db,
            select.order_by_asc(Column::StudentNo),
            &query.pagination,
        )
        .await?;
        Ok(PaginatedResponse {
            items: student_details(&self.db, students).await?,
            pagination,
        })
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        ensure_department_exists(&self.db, update.dept_id).await?;

        let mut model: ActiveModel = existing.into();
        if let Some(no) = update.student_no {
            model.student_no = Set(no);
        }
        if let Some(dept_id) = update.dept_id {
            model.dept_id = Set(Some(dept_id));
        }
        if let Some(class_name) = update.class_name {
            model.class_name = Set(Some(class_name));
        }
        if let Some(grade) = update.grade {
            model.grade = Set(Some(grade));
        }
        if let Some(year) = update.enrollment_year {
            model.enrollment_year = Set(Some(year));
        }
        if let Some(year) = update.graduation_year {
            model.graduation_year = Set(Some(year));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(Some(model.update(&self.db).await?.into_student()))
    }

    /// 删除学生档案；仍有选课记录时拒绝
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let enrolled = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(id))
            .count(&txn)
            .await?;
        if enrolled > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "该学生仍有 {enrolled} 条选课记录"
            )));
        }

        let result = Students::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
