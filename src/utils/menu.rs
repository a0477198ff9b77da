//! 按权限裁剪侧边栏菜单

use crate::models::auth::entities::CurrentUser;
use crate::models::menus::{MenuItem, SIDEBAR_MENU};

/// 递归过滤菜单。
///
/// 先过滤子菜单；子菜单全部被裁掉且自身没有路径的父节点会被移除；
/// 最后节点未声明权限或 `allow` 命中任一权限码时保留。
pub fn filter_menu<F>(items: &[MenuItem], allow: &F) -> Vec<MenuItem>
where
    F: Fn(&[String]) -> bool,
{
    items
        .iter()
        .filter(|item| !item.hidden)
        .filter_map(|item| {
            let mut item = item.clone();
            if !item.children.is_empty() {
                item.children = filter_menu(&item.children, allow);
                if item.children.is_empty() && item.path.is_none() {
                    return None;
                }
            }
            (item.permissions.is_empty() || allow(&item.permissions)).then_some(item)
        })
        .collect()
}

/// 当前用户可见的菜单
pub fn menu_for(user: &CurrentUser) -> Vec<MenuItem> {
    filter_menu(&SIDEBAR_MENU, &|codes: &[String]| {
        let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
        user.has_permission(&codes)
    })
}

/// 所有带路径的叶子节点
pub fn leaf_items(items: &[MenuItem]) -> Vec<&MenuItem> {
    let mut leaves = Vec::new();
    for item in items {
        if item.children.is_empty() {
            if item.path.is_some() {
                leaves.push(item);
            }
        } else {
            leaves.extend(leaf_items(&item.children));
        }
    }
    leaves
}

pub fn find_by_path<'a>(items: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if item.path.as_deref() == Some(path) {
            Some(item)
        } else {
            find_by_path(&item.children, path)
        }
    })
}

/// 从根到目标节点的路径；找不到时为空
pub fn breadcrumb<'a>(items: &'a [MenuItem], path: &str) -> Vec<&'a MenuItem> {
    for item in items {
        if item.path.as_deref() == Some(path) {
            return vec![item];
        }
        let mut trail = breadcrumb(&item.children, path);
        if !trail.is_empty() {
            trail.insert(0, item);
            return trail;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuItem> {
        vec![
            MenuItem::new("首页", "House").path("/home"),
            MenuItem::new("管理", "Setting")
                .permissions(&["A", "B"])
                .children(vec![
                    MenuItem::new("甲", "X").path("/admin/a").permissions(&["A"]),
                    MenuItem::new("乙", "Y").path("/admin/b").permissions(&["B"]),
                    MenuItem::new("隐藏", "Z").path("/admin/h").hidden(),
                ]),
            MenuItem::new("空分组", "Folder").children(vec![
                MenuItem::new("丙", "C").path("/c").permissions(&["C"]),
            ]),
        ]
    }

    fn allow_only(granted: &'static [&'static str]) -> impl Fn(&[String]) -> bool {
        move |codes: &[String]| codes.iter().any(|c| granted.contains(&c.as_str()))
    }

    #[test]
    fn test_filter_keeps_unrestricted_and_granted() {
        let menu = tree();
        let filtered = filter_menu(&menu, &allow_only(&["A"]));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].children.len(), 1);
        assert_eq!(filtered[1].children[0].path.as_deref(), Some("/admin/a"));
    }

    #[test]
    fn test_filter_drops_empty_groups_and_hidden() {
        let menu = tree();
        let filtered = filter_menu(&menu, &allow_only(&[]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "首页");

        let all = filter_menu(&menu, &|_: &[String]| true);
        assert!(find_by_path(&all, "/admin/h").is_none());
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let menu = tree();
        let before = menu.clone();
        let _ = filter_menu(&menu, &allow_only(&["C"]));
        assert_eq!(menu, before);
    }

    #[test]
    fn test_leaves_and_breadcrumb() {
        let menu = tree();
        let leaves: Vec<_> = leaf_items(&menu)
            .into_iter()
            .filter_map(|m| m.path.as_deref())
            .collect();
        assert_eq!(leaves, vec!["/home", "/admin/a", "/admin/b", "/admin/h", "/c"]);

        let trail: Vec<_> = breadcrumb(&menu, "/admin/b")
            .into_iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(trail, vec!["管理", "乙"]);
        assert!(breadcrumb(&menu, "/missing").is_empty());
    }

    #[test]
    fn test_static_menu_has_dashboard_for_everyone() {
        let filtered = filter_menu(&SIDEBAR_MENU, &|_: &[String]| false);
        assert!(find_by_path(&filtered, "/dashboard").is_some());
    }
}
