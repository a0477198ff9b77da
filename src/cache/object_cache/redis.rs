use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64,
}

impl RedisObjectCache {
    /// 创建客户端并 PING 一次，连不上时返回错误以便退回内存缓存
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.as_str())
            .map_err(|e| format!("Redis URL 无效 {}: {e}", redis_config.url))?;
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis 连接失败 {}: {e}", redis_config.url))?;
        let pong: String = redis::cmd("PING")
            .query(&mut conn)
            .map_err(|e| format!("Redis PING 失败: {e}"))?;
        debug!("Redis PING: {pong}, 前缀 '{}'", redis_config.key_prefix);

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("获取 Redis 连接失败: {e}");
                None
            }
        }
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::ExistsButNoValue;
        };
        match conn.get::<_, Option<String>>(self.make_key(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("读取缓存 '{key}' 失败: {e}");
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };
        let ttl = if ttl == 0 { self.ttl } else { ttl };
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.make_key(&key), value, ttl)
            .await
        {
            error!("写入缓存 '{key}' 失败: {e}");
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };
        if let Err(e) = conn.del::<_, i32>(self.make_key(key)).await {
            error!("删除缓存 '{key}' 失败: {e}");
        }
    }

    /// 只清除本服务前缀下的键
    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connection().await else {
            return;
        };
        let pattern = format!("{}*", self.key_prefix);
        let keys: Vec<String> = match conn.keys(&pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                error!("列出缓存键失败: {e}");
                return;
            }
        };
        if !keys.is_empty()
            && let Err(e) = conn.del::<_, i32>(keys).await
        {
            error!("清空缓存失败: {e}");
        }
    }
}
