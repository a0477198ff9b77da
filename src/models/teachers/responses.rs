use super::entities::TeacherDetail;
use crate::models::common::PaginatedResponse;

pub type TeacherListResponse = PaginatedResponse<TeacherDetail>;
