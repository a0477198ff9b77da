use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 内置默认值，保证没有配置文件时也能启动（开发/测试）
const DEFAULT_CONFIG: &str = r#"
[app]
system_name = "School Admin"
environment = "development"
log_level = "info"

[server]
host = "127.0.0.1"
port = 8080
unix_socket_path = ""
workers = 0
max_workers = 8

[server.timeouts]
client_request = 5000
client_disconnect = 1000
keep_alive = 30

[server.limits]
max_payload_size = 1048576

[jwt]
secret = "change-me-in-production"
access_token_expiry = 30
refresh_token_expiry = 7
refresh_token_remember_me_expiry = 30

[argon2]
memory_cost = 19456
time_cost = 2
parallelism = 1

[database]
url = "school.db"
pool_size = 8
timeout = 10

[cache]
type = "moka"
default_ttl = 300

[cache.redis]
url = "redis://127.0.0.1:6379"
key_prefix = "school:"
pool_size = 8

[cache.memory]
max_capacity = 10000

[cors]
allowed_origins = ["*"]
allowed_methods = ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
allowed_headers = ["Authorization", "Content-Type"]
max_age = 3600

[academic]
usual_weight = 0.3
enrollment_requires_approval = true
"#;

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            // 默认配置文件
            .add_source(File::with_name("config").required(false))
            // 环境特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 环境变量覆盖，如 SCHOOL_SERVER_PORT
            .add_source(
                Environment::with_prefix("SCHOOL")
                    .separator("_")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "cache.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        if !(0.0..=1.0).contains(&app_config.academic.usual_weight) {
            return Err(ConfigError::Message(format!(
                "academic.usual_weight must be within [0, 1], got {}",
                app_config.academic.usual_weight
            )));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults_deserialize() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("default config should deserialize");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.cache_type, "moka");
        assert_eq!(config.jwt.access_token_expiry, 30);
        assert!((config.academic.usual_weight - 0.3).abs() < f64::EPSILON);
        assert!(config.is_development());
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }
}
