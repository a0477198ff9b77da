use super::entities::Role;
use crate::models::common::PaginatedResponse;

pub type RoleListResponse = PaginatedResponse<Role>;
