//! 权限实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub permission_name: String,
    #[sea_orm(unique)]
    pub permission_code: String,
    pub module: String,
    pub description: Option<String>,
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_permissions::Entity")]
    RolePermissions,
}

impl Related<super::role_permissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_permission(self) -> crate::models::permissions::entities::Permission {
        crate::models::permissions::entities::Permission {
            id: self.id,
            permission_name: self.permission_name,
            permission_code: self.permission_code,
            module: self.module,
            description: self.description,
            status: self.status,
        }
    }
}
