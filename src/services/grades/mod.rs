pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::grades::requests::{BatchGradeRequest, GradeListParams, RecordGradeRequest};
use crate::models::students::requests::TranscriptParams;

define_service!(GradeService);

impl GradeService {
    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    // 当前学生的成绩
    pub async fn my_grades(
        &self,
        query: TranscriptParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::my_grades(self, query, request).await
    }

    pub async fn offering_grades(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::offering_grades(self, offering_id, request).await
    }

    // 录入或更新单条成绩
    pub async fn record_grade(
        &self,
        enrollment_id: i64,
        scores: RecordGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_grade(self, enrollment_id, scores, request).await
    }

    pub async fn batch_update(
        &self,
        batch: BatchGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::batch_update(self, batch, request).await
    }
}
