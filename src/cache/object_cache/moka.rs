use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 进程内缓存，TTL 在构造时统一设置
pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        if config.cache.default_ttl == 0 {
            return Err("cache.default_ttl 必须大于 0".to_string());
        }
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        debug!("Moka 缓存容量 {max_capacity}，TTL {ttl_secs}s");
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build(),
        }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    // 单条 TTL 被忽略，统一使用构造时的 TTL
    async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(10, 60);
        cache.insert_raw("a".into(), "1".into(), 0).await;
        assert_eq!(cache.get_raw("a").await, CacheResult::Found("1".to_string()));
        cache.remove("a").await;
        assert_eq!(cache.get_raw("a").await, CacheResult::NotFound);
    }
}
