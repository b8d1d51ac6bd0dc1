// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::AdminCredentials;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@easypeek.com";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123456";

/// 应用程序配置设置
///
/// 包含数据库、服务器、指标、种子数据和初始管理员等配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
    /// 种子数据配置
    pub seed: SeedSettings,
    /// 初始管理员配置
    pub admin: AdminSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    /// Prometheus 抓取地址
    pub address: String,
}

/// 种子数据配置设置
#[derive(Debug, Deserialize)]
pub struct SeedSettings {
    /// 批量导入文件路径
    pub news_file: Option<String>,
    /// 启动时导入批量文件
    pub seed_on_start: bool,
    /// 启动时创建初始管理员
    pub seed_admin: bool,
    /// 启动时写入默认订阅源
    pub seed_rss_sources: bool,
}

/// 初始管理员配置
///
/// `ADMIN_EMAIL`、`ADMIN_USERNAME`、`ADMIN_PASSWORD` 环境变量优先
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl AdminSettings {
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `NEWSDESK__*` 环境变量，最后是 `ADMIN_*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "sqlite://newsdesk.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.address", "0.0.0.0:9000")?
            .set_default("seed.news_file", "data/news.json")?
            .set_default("seed.seed_on_start", false)?
            .set_default("seed.seed_admin", true)?
            .set_default("seed.seed_rss_sources", true)?
            .set_default("admin.email", DEFAULT_ADMIN_EMAIL)?
            .set_default("admin.username", DEFAULT_ADMIN_USERNAME)?
            .set_default("admin.password", DEFAULT_ADMIN_PASSWORD)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NEWSDESK").separator("__"))
            .set_override_option("admin.email", std::env::var("ADMIN_EMAIL").ok())?
            .set_override_option("admin.username", std::env::var("ADMIN_USERNAME").ok())?
            .set_override_option("admin.password", std::env::var("ADMIN_PASSWORD").ok())?;

        builder.build()?.try_deserialize()
    }
}
