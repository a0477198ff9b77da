use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// 页码上限，保证 page * size 的偏移量不溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

impl PaginationQuery {
    /// 规范化后的 (page, size)：page 限定在 [1, MAX_PAGE]，size 限定在 [1, 100]
    pub fn normalized(&self) -> (u64, u64) {
        (
            self.page.clamp(1, MAX_PAGE) as u64,
            self.size.clamp(1, MAX_PAGE_SIZE) as u64,
        )
    }
}

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u64, size: u64, total: u64) -> Self {
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
        Self {
            page: page as i64,
            page_size: size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> PaginatedResponse<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_omitted() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 10);
    }

    #[test]
    fn test_string_values_accepted() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page":"3","size":"20"}"#).unwrap();
        assert_eq!(query.normalized(), (3, 20));
    }

    #[test]
    fn test_normalized_clamps() {
        let query = PaginationQuery { page: 0, size: 500 };
        assert_eq!(query.normalized(), (1, 100));
        let query = PaginationQuery { page: -4, size: 0 };
        assert_eq!(query.normalized(), (1, 1));
    }

    #[test]
    fn test_huge_page_is_bounded() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page":"9223372036854775807","size":"100"}"#).unwrap();
        let (page, size) = query.normalized();
        assert_eq!(page, MAX_PAGE as u64);
        assert!(page.checked_mul(size).is_some_and(|offset| offset <= i64::MAX as u64));
    }

    #[test]
    fn test_pagination_info_pages() {
        let info = PaginationInfo::new(2, 10, 21);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.page, 2);
        assert_eq!(info.page_size, 10);
        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
    }
}
