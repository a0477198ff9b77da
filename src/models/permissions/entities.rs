use serde::{Deserialize, Serialize};

// 权限实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub permission_name: String,
    pub permission_code: String,
    pub module: String,
    pub description: Option<String>,
    pub status: bool,
}
