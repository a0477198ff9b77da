use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::GradeService;
use crate::config::AppConfig;
use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::CurrentUser,
    grades::{
        entities::Grade,
        requests::{BatchGradeRequest, RecordGradeRequest},
        responses::{BatchGradeFailure, BatchGradeResponse},
    },
    permissions::codes,
};
use crate::services::teachers::access::own_teacher;
use crate::services::{bad_request, current_user, forbidden, internal_error, storage_error};
use crate::storage::Storage;
use crate::utils::grading::build_grade_record;

/// 单条录入失败的原因
enum RecordFailure {
    Invalid(String),
    Forbidden(String),
    Storage(SchoolSystemError),
}

impl RecordFailure {
    fn reason(&self) -> String {
        match self {
            RecordFailure::Invalid(msg) | RecordFailure::Forbidden(msg) => msg.clone(),
            RecordFailure::Storage(e) => e.message().to_string(),
        }
    }

    fn into_response(self) -> HttpResponse {
        match self {
            RecordFailure::Invalid(msg) => bad_request(ErrorCode::GradeInvalidScore, msg),
            RecordFailure::Forbidden(msg) => forbidden(msg),
            RecordFailure::Storage(e) => storage_error(
                e,
                ErrorCode::EnrollmentNotFound,
                ErrorCode::GradeEnrollmentNotApproved,
                "录入成绩失败",
            ),
        }
    }
}

/// 录入人的身份：管理者可录入任意开课，教师只能录入本人讲授的开课
struct Recorder {
    principal: CurrentUser,
    teacher_id: Option<i64>,
    offering_teachers: HashMap<i64, i64>,
}

impl Recorder {
    async fn new(storage: &Arc<dyn Storage>, principal: CurrentUser) -> ActixResult<Self> {
        let teacher_id = if principal.has_permission(&[codes::GRADE_MANAGE]) {
            None
        } else {
            own_teacher(storage, &principal).await?.map(|t| t.teacher.id)
        };
        Ok(Self {
            principal,
            teacher_id,
            offering_teachers: HashMap::new(),
        })
    }

    async fn check(
        &mut self,
        storage: &Arc<dyn Storage>,
        enrollment_id: i64,
    ) -> Result<(), RecordFailure> {
        if self.principal.has_permission(&[codes::GRADE_MANAGE]) {
            return Ok(());
        }
        let Some(teacher_id) = self.teacher_id else {
            return Err(RecordFailure::Forbidden("只有任课教师可以录入成绩".to_string()));
        };

        let enrollment = storage
            .get_enrollment_by_id(enrollment_id)
            .await
            .map_err(RecordFailure::Storage)?
            .ok_or_else(|| {
                RecordFailure::Storage(SchoolSystemError::not_found(format!(
                    "选课记录 {enrollment_id} 不存在"
                )))
            })?;

        let owner = match self.offering_teachers.get(&enrollment.offering_id) {
            Some(owner) => *owner,
            None => {
                let offering = storage
                    .get_offering_by_id(enrollment.offering_id)
                    .await
                    .map_err(RecordFailure::Storage)?
                    .ok_or_else(|| {
                        RecordFailure::Storage(SchoolSystemError::not_found("开课不存在"))
                    })?;
                self.offering_teachers
                    .insert(enrollment.offering_id, offering.teacher_id);
                offering.teacher_id
            }
        };

        if owner != teacher_id {
            return Err(RecordFailure::Forbidden(
                "只能录入本人讲授课程的成绩".to_string(),
            ));
        }
        Ok(())
    }

    async fn record(
        &mut self,
        storage: &Arc<dyn Storage>,
        enrollment_id: i64,
        scores: &RecordGradeRequest,
    ) -> Result<Grade, RecordFailure> {
        let record = build_grade_record(
            scores,
            AppConfig::get().academic.usual_weight,
            self.principal.id(),
        )
        .map_err(RecordFailure::Invalid)?;
        self.check(storage, enrollment_id).await?;
        storage
            .upsert_grade(enrollment_id, record)
            .await
            .map_err(RecordFailure::Storage)
    }
}

pub async fn record_grade(
    service: &GradeService,
    enrollment_id: i64,
    scores: RecordGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;
    let mut recorder = Recorder::new(&storage, principal).await?;

    match recorder.record(&storage, enrollment_id, &scores).await {
        Ok(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "成绩录入成功"))),
        Err(failure) => Ok(failure.into_response()),
    }
}

/// 逐条录入，单条失败不影响其余记录
pub async fn batch_update(
    service: &GradeService,
    batch: BatchGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if batch.grades.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "grades 不能为空"));
    }
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;
    let mut recorder = Recorder::new(&storage, principal).await?;

    let mut result = BatchGradeResponse {
        updated: 0,
        failed: Vec::new(),
    };
    for item in batch.grades {
        match recorder.record(&storage, item.enrollment_id, &item.scores).await {
            Ok(_) => result.updated += 1,
            Err(RecordFailure::Storage(e)) if !is_business_error(&e) => {
                return Ok(internal_error("批量录入成绩失败", e));
            }
            Err(failure) => result.failed.push(BatchGradeFailure {
                enrollment_id: item.enrollment_id,
                reason: failure.reason(),
            }),
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(result, "批量录入完成")))
}

fn is_business_error(e: &SchoolSystemError) -> bool {
    matches!(
        e,
        SchoolSystemError::NotFound(_)
            | SchoolSystemError::Conflict(_)
            | SchoolSystemError::Validation(_)
    )
}
