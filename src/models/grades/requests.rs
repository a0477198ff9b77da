use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub offering_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub student_id: Option<i64>,
    pub semester: Option<String>,
}

// 录入/更新成绩；final_score 缺省时由平时与考试成绩加权得出
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordGradeRequest {
    pub usual_score: Option<f64>,
    pub exam_score: Option<f64>,
    pub final_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchGradeItem {
    pub enrollment_id: i64,
    #[serde(flatten)]
    pub scores: RecordGradeRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchGradeRequest {
    pub grades: Vec<BatchGradeItem>,
}
