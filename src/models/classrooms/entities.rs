use serde::{Deserialize, Serialize};

crate::define_string_enum! {
    /// 教室类型：普通教室 / 实验室 / 多媒体教室 / 机房
    pub enum ClassroomType {
        Ordinary => "ordinary",
        Lab => "lab",
        Multimedia => "multimedia",
        Computer => "computer",
    }
}

crate::define_string_enum! {
    /// 教室状态：停用 / 可用 / 维护中
    pub enum ClassroomStatus {
        Disabled => "disabled",
        Available => "available",
        Maintenance => "maintenance",
    }
}

// 教室实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub room_no: String,
    pub building: String,
    pub floor: Option<i32>,
    pub capacity: i32,
    pub room_type: ClassroomType,
    pub equipment: Vec<String>,
    pub status: ClassroomStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Classroom {
    /// 用于提示信息的名称，如 "A栋 101"
    pub fn label(&self) -> String {
        format!("{} {}", self.building, self.room_no)
    }
}
