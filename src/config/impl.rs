use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 先以编译期默认值打底，配置文件和环境变量都是可选的
            .add_source(Config::try_from(&AppConfig::default())?)
            // 然后加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("CAMPUS")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
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
            )?
            .set_override_option("cache.redis.default_ttl", std::env::var("REDIS_TTL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
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

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: super::AppSettings {
                system_name: "Campus System".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            server: super::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                unix_socket_path: String::new(),
                workers: 0,
                max_workers: 8,
                timeouts: super::TimeoutConfig {
                    client_request: 5000,
                    client_disconnect: 1000,
                    keep_alive: 30,
                },
                limits: super::LimitConfig {
                    max_payload_size: 10 * 1024 * 1024,
                },
            },
            jwt: super::JwtConfig {
                secret: String::new(),
                access_token_expiry: 30,
                refresh_token_expiry: 7,
                refresh_token_remember_me_expiry: 30,
            },
            database: super::DatabaseConfig {
                url: "campus.db".to_string(),
                pool_size: 10,
                timeout: 10,
            },
            cache: super::CacheConfig {
                cache_type: "moka".to_string(),
                default_ttl: 300,
                redis: super::RedisConfig {
                    url: "redis://127.0.0.1:6379".to_string(),
                    key_prefix: "campus:".to_string(),
                    pool_size: 8,
                },
                memory: super::MemoryConfig {
                    max_capacity: 10_000,
                },
            },
            cors: super::CorsConfig {
                allowed_origins: vec![],
                allowed_methods: vec![],
                allowed_headers: vec![],
                max_age: 3600,
            },
            upload: super::UploadConfig {
                dir: "uploads".to_string(),
                max_size: 2 * 1024 * 1024,
                allowed_types: vec![
                    ".png".to_string(),
                    ".jpg".to_string(),
                    ".jpeg".to_string(),
                    ".webp".to_string(),
                ],
            },
            argon2: super::Argon2Config {
                memory_cost: 19456,
                time_cost: 2,
                parallelism: 1,
            },
            analytics: super::AnalyticsConfig {
                weak_class_threshold: 40.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        // 仓库不携带 config.toml，缺省配置必须能独立通过反序列化
        let config = AppConfig::load().expect("compiled defaults should satisfy the schema");
        assert_eq!(config.cache.cache_type, "moka");
        assert_eq!(config.analytics.weak_class_threshold, 40.0);
        // workers=0 在加载时被替换为实际核数
        assert!(config.server.workers >= 1);
    }
}
