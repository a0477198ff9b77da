use super::entities::Classroom;
use crate::models::common::PaginatedResponse;

pub type ClassroomListResponse = PaginatedResponse<Classroom>;
