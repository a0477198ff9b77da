use super::entities::EnrollmentDetail;
use crate::models::common::PaginatedResponse;

pub type EnrollmentListResponse = PaginatedResponse<EnrollmentDetail>;
