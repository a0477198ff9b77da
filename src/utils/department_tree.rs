//! 部门树构建，父子关系按 id 查找；遇到环时断开

use std::collections::{HashMap, HashSet};

use crate::models::departments::entities::{Department, DepartmentNode};

pub fn build_department_tree(departments: Vec<Department>) -> Vec<DepartmentNode> {
    let ids: HashSet<i64> = departments.iter().map(|d| d.id).collect();
    let mut children_of: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut roots = Vec::new();
    let mut order = Vec::with_capacity(departments.len());

    for dept in &departments {
        order.push(dept.id);
        match dept.parent_id {
            Some(parent) if parent != dept.id && ids.contains(&parent) => {
                children_of.entry(parent).or_default().push(dept.id)
            }
            _ => roots.push(dept.id),
        }
    }

    let mut by_id: HashMap<i64, Department> =
        departments.into_iter().map(|d| (d.id, d)).collect();
    let mut visited = HashSet::new();
    let mut tree: Vec<DepartmentNode> = roots
        .into_iter()
        .filter_map(|id| build_node(id, &children_of, &mut by_id, &mut visited))
        .collect();

    // 环上的节点无法从根到达，提升为根
    for id in order {
        if let Some(node) = build_node(id, &children_of, &mut by_id, &mut visited) {
            tree.push(node);
        }
    }
    tree
}

fn build_node(
    id: i64,
    children_of: &HashMap<i64, Vec<i64>>,
    by_id: &mut HashMap<i64, Department>,
    visited: &mut HashSet<i64>,
) -> Option<DepartmentNode> {
    if !visited.insert(id) {
        return None;
    }
    let department = by_id.remove(&id)?;
    let children = children_of
        .get(&id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child| build_node(*child, children_of, by_id, visited))
                .collect()
        })
        .unwrap_or_default();
    Some(DepartmentNode {
        department,
        children,
    })
}

/// 判断 `candidate` 是否为 `ancestor` 自身或其后代
///
/// `parents` 为 id -> parent_id 映射；沿父链向上查找，遇环终止。
pub fn is_self_or_descendant(
    parents: &HashMap<i64, Option<i64>>,
    ancestor: i64,
    candidate: i64,
) -> bool {
    let mut seen = HashSet::new();
    let mut current = Some(candidate);
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        if !seen.insert(id) {
            return false;
        }
        current = parents.get(&id).copied().flatten();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64, parent_id: Option<i64>) -> Department {
        let now = chrono::Utc::now();
        Department {
            id,
            dept_name: format!("部门{id}"),
            dept_code: format!("D{id}"),
            parent_id,
            description: None,
            status: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn count(nodes: &[DepartmentNode]) -> usize {
        nodes.iter().map(|n| 1 + count(&n.children)).sum()
    }

    #[test]
    fn test_builds_nested_tree() {
        let tree = build_department_tree(vec![
            dept(1, None),
            dept(2, Some(1)),
            dept(3, Some(2)),
            dept(4, None),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children[0].children[0].department.id, 3);
        assert_eq!(count(&tree), 4);
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let tree = build_department_tree(vec![dept(5, Some(99))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].department.id, 5);
    }

    #[test]
    fn test_cycle_does_not_loop_or_drop_nodes() {
        let tree = build_department_tree(vec![dept(1, Some(2)), dept(2, Some(1)), dept(3, Some(3))]);
        assert_eq!(count(&tree), 3);
    }

    #[test]
    fn test_is_self_or_descendant() {
        let parents: HashMap<i64, Option<i64>> =
            [(1, None), (2, Some(1)), (3, Some(2)), (4, None)].into_iter().collect();
        assert!(is_self_or_descendant(&parents, 1, 3));
        assert!(is_self_or_descendant(&parents, 2, 2));
        assert!(!is_self_or_descendant(&parents, 3, 1));
        assert!(!is_self_or_descendant(&parents, 1, 4));

        let cyclic: HashMap<i64, Option<i64>> =
            [(1, Some(2)), (2, Some(1))].into_iter().collect();
        assert!(!is_self_or_descendant(&cyclic, 9, 1));
    }
}
