use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PermissionService;
use crate::models::{
    ApiResponse,
    permissions::{
        catalog::{MODULES, module_name},
        entities::Permission,
        requests::PermissionListParams,
        responses::{PermissionGroup, PermissionModule},
    },
};
use crate::services::internal_error;

/// 按模块分组；目录中的模块按目录顺序在前，未登记的模块追加在后
pub fn group_by_module(permissions: Vec<Permission>) -> Vec<PermissionGroup> {
    let mut groups: Vec<PermissionGroup> = MODULES
        .iter()
        .map(|(code, name)| PermissionGroup {
            module: code.to_string(),
            module_name: name.to_string(),
            permissions: Vec::new(),
        })
        .collect();

    for perm in permissions {
        match groups.iter_mut().find(|g| g.module == perm.module) {
            Some(group) => group.permissions.push(perm),
            None => groups.push(PermissionGroup {
                module: perm.module.clone(),
                module_name: module_name(&perm.module).to_string(),
                permissions: vec![perm],
            }),
        }
    }

    groups.retain(|g| !g.permissions.is_empty());
    groups
}

pub async fn list_permissions(
    service: &PermissionService,
    query: PermissionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_permissions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取权限列表成功"))),
        Err(e) => Ok(internal_error("获取权限列表失败", e)),
    }
}

pub async fn list_all_permissions(
    service: &PermissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_permissions().await {
        Ok(perms) => Ok(HttpResponse::Ok().json(ApiResponse::success(perms, "获取权限列表成功"))),
        Err(e) => Ok(internal_error("获取权限列表失败", e)),
    }
}

pub async fn list_by_module(
    service: &PermissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_all_permissions().await {
        Ok(perms) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(group_by_module(perms), "获取权限分组成功"))),
        Err(e) => Ok(internal_error("获取权限分组失败", e)),
    }
}

pub async fn list_modules() -> ActixResult<HttpResponse> {
    let modules: Vec<PermissionModule> = MODULES
        .iter()
        .map(|&(code, name)| PermissionModule { code, name })
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(modules, "获取权限模块成功")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(id: i64, code: &str, module: &str) -> Permission {
        Permission {
            id,
            permission_name: code.to_string(),
            permission_code: code.to_string(),
            module: module.to_string(),
            description: None,
            status: true,
        }
    }

    #[test]
    fn test_group_by_module_follows_catalog_order() {
        let first = MODULES[0].0;
        let second = MODULES[1].0;
        let groups = group_by_module(vec![
            perm(1, "B", second),
            perm(2, "A", first),
            perm(3, "X", "custom"),
        ]);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].module, first);
        assert_eq!(groups[1].module, second);
        assert_eq!(groups[2].module, "custom");
        assert_eq!(groups[2].permissions.len(), 1);
    }

    #[test]
    fn test_group_by_module_drops_empty() {
        assert!(group_by_module(Vec::new()).is_empty());
    }
}
