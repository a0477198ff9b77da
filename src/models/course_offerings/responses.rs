use super::entities::OfferingDetail;
use crate::models::common::PaginatedResponse;

pub type OfferingListResponse = PaginatedResponse<OfferingDetail>;
