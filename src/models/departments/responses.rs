use super::entities::Department;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

pub type DepartmentListResponse = PaginatedResponse<Department>;

// 部门引用计数，用于删除前检查
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentUsage {
    pub children: u64,
    pub teachers: u64,
    pub students: u64,
    pub courses: u64,
}

impl DepartmentUsage {
    pub fn is_empty(&self) -> bool {
        self.children == 0 && self.teachers == 0 && self.students == 0 && self.courses == 0
    }
}
