use super::entities::GradeDetail;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

pub type GradeListResponse = PaginatedResponse<GradeDetail>;

#[derive(Debug, Clone, Serialize)]
pub struct BatchGradeFailure {
    pub enrollment_id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchGradeResponse {
    pub updated: usize,
    pub failed: Vec<BatchGradeFailure>,
}
