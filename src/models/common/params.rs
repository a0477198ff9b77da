//! 查询参数反序列化辅助
//!
//! `#[serde(flatten)]` 会把 query string 中的值统一缓冲为字符串，
//! 数字/布尔类型的可选筛选条件需要同时接受字符串与原生类型。

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOr<T> {
    Native(T),
    Text(String),
}

/// 可选 i64：接受整数、数字字符串、空字符串（视为 None）
pub fn deserialize_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOr<i64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOr::Native(v)) => Ok(Some(v)),
        Some(StringOr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOr::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("无效的整数: '{s}'"))),
    }
}

/// 必填 i64：接受整数或数字字符串
pub fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOr::<i64>::deserialize(deserializer)? {
        StringOr::Native(v) => Ok(v),
        StringOr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的整数: '{s}'"))),
    }
}

/// 可选 bool：接受 true/false、"true"/"false"、"1"/"0"
pub fn deserialize_option_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOr<bool>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOr::Native(v)) => Ok(Some(v)),
        Some(StringOr::Text(s)) => match s.trim() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!("无效的布尔值: '{other}'"))),
        },
    }
}

/// 区分"字段缺失"与"显式 null"：缺失为 None，null 为 Some(None)
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "deserialize_option_i64")]
        dept_id: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_option_bool")]
        status: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_some")]
        parent_id: Option<Option<i64>>,
    }

    #[test]
    fn test_strings_and_natives() {
        let f: Filter = serde_json::from_str(r#"{"dept_id":"12","status":"1"}"#).unwrap();
        assert_eq!(f.dept_id, Some(12));
        assert_eq!(f.status, Some(true));

        let f: Filter = serde_json::from_str(r#"{"dept_id":7,"status":false}"#).unwrap();
        assert_eq!(f.dept_id, Some(7));
        assert_eq!(f.status, Some(false));
    }

    #[test]
    fn test_empty_string_is_none() {
        let f: Filter = serde_json::from_str(r#"{"dept_id":"","status":""}"#).unwrap();
        assert_eq!(f.dept_id, None);
        assert_eq!(f.status, None);
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(serde_json::from_str::<Filter>(r#"{"dept_id":"abc"}"#).is_err());
    }

    #[test]
    fn test_double_option() {
        let f: Filter = serde_json::from_str("{}").unwrap();
        assert_eq!(f.parent_id, None);
        let f: Filter = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(f.parent_id, Some(None));
        let f: Filter = serde_json::from_str(r#"{"parent_id":3}"#).unwrap();
        assert_eq!(f.parent_id, Some(Some(3)));
    }
}
