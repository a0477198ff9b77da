use super::entities::StudentStatusDetail;
use crate::models::common::PaginatedResponse;

pub type StudentStatusListResponse = PaginatedResponse<StudentStatusDetail>;
