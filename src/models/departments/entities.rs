use serde::{Deserialize, Serialize};

// 部门实体，parent_id 构成自引用树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub dept_name: String,
    pub dept_code: String,
    pub parent_id: Option<i64>,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 部门树节点
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentNode {
    #[serde(flatten)]
    pub department: Department,
    pub children: Vec<DepartmentNode>,
}
