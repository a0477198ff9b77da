//! 对象缓存
//!
//! 缓存后端以插件形式注册，按配置的 `cache.cache_type` 选择，构造失败时退回内存缓存。
//! 目前用于按 access token 缓存认证主体。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};

/// 缓存读取结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端出错或值无法解析
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

impl dyn ObjectCache {
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        match self.get_raw(key).await {
            CacheResult::Found(raw) => match serde_json::from_str(&raw) {
                Ok(value) => CacheResult::Found(value),
                Err(e) => {
                    warn!("缓存值解析失败，已移除 {key}: {e}");
                    self.remove(key).await;
                    CacheResult::ExistsButNoValue
                }
            },
            CacheResult::NotFound => CacheResult::NotFound,
            CacheResult::ExistsButNoValue => CacheResult::ExistsButNoValue,
        }
    }

    pub async fn insert_json<T: Serialize>(&self, key: String, value: &T, ttl: u64) {
        match serde_json::to_string(value) {
            Ok(raw) => self.insert_raw(key, raw, ttl).await,
            Err(e) => warn!("缓存值序列化失败 {key}: {e}"),
        }
    }
}

/// 为缓存插件生成 `register()`，在启动时调用以加入注册表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub fn register() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::SchoolSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

/// 注册内置的缓存插件
pub fn register_builtin_plugins() {
    object_cache::moka::register();
    object_cache::redis::register();
}

/// 按配置创建缓存，失败时退回 moka
pub async fn create_object_cache() -> Result<Arc<dyn ObjectCache>> {
    register_builtin_plugins();
    register::debug_object_cache_registry();

    let cache_type = AppConfig::get().cache.cache_type.as_str();
    if let Some(constructor) = register::get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                info!("缓存后端: {cache_type}");
                return Ok(Arc::from(cache));
            }
            Err(e) => warn!("缓存后端 {cache_type} 初始化失败，改用内存缓存: {e}"),
        }
    } else {
        warn!("未知的缓存类型 {cache_type}，改用内存缓存");
    }

    let fallback = register::get_object_cache_plugin("moka")
        .ok_or_else(|| SchoolSystemError::cache_plugin_not_found("moka"))?;
    Ok(Arc::from(fallback().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    #[tokio::test]
    async fn test_json_helpers() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        cache
            .insert_json("k".to_string(), &vec!["TEACHER".to_string()], 0)
            .await;
        assert_eq!(
            cache.get_json::<Vec<String>>("k").await,
            CacheResult::Found(vec!["TEACHER".to_string()])
        );

        cache.insert_raw("bad".to_string(), "{".to_string(), 0).await;
        assert_eq!(
            cache.get_json::<Vec<String>>("bad").await,
            CacheResult::ExistsButNoValue
        );
        assert_eq!(cache.get_raw("bad").await, CacheResult::NotFound);
    }
}
