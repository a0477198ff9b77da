//! SQL 辅助函数

use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};

/// 转义 LIKE 模式中的通配符（`%`、`_`）与转义符本身
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `column LIKE '%keyword%' ESCAPE '\'`，关键字中的通配符按字面匹配
pub fn contains_escaped<C: ColumnTrait>(column: C, keyword: &str) -> Condition {
    let pattern = format!("%{}%", escape_like_pattern(keyword.trim()));
    Condition::all().add(column.like(LikeExpr::new(pattern).escape('\\')))
}

/// 多列任一包含关键字
pub fn any_contains<C: ColumnTrait>(columns: &[C], keyword: &str) -> Condition {
    columns
        .iter()
        .fold(Condition::any(), |cond, col| {
            cond.add(contains_escaped(*col, keyword))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("abc"), "abc");
        assert_eq!(escape_like_pattern("50%"), "50\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("c:\\x"), "c:\\\\x");
    }
}
