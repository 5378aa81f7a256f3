use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, IntoEnumIterator};
use url::Url;

use crate::errors::{Result, TemplateError};

/// 默认配置文件名
pub const DEFAULT_CONFIG_PATH: &str = "template-desk.toml";

/// 后端集成模式
///
/// 两种模式互斥，每个部署只选其一。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    AsRefStr,
    EnumMessage,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    #[strum(message = "Authenticated CRUD API, imports download the archive locally")]
    Crud,
    #[strum(message = "Read-only public JSON feed, imports are ingested by the server")]
    Feed,
}

impl GatewayMode {
    /// One-line description of the mode
    pub fn describe(&self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

impl std::fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for GatewayMode {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::iter().find(|m| m.as_ref() == wanted).ok_or_else(|| {
            let valid: Vec<String> = Self::iter().map(|m| m.to_string()).collect();
            format!("Invalid gateway mode: '{}'. Valid: {}", s, valid.join(", "))
        })
    }
}

/// 静态配置（启动时从 TOML 与环境变量加载一次）
///
/// - api: 后端地址、路径、CSRF 令牌与会话 cookie
/// - gateway: 集成模式与下载目录
/// - panel: 面板显示与通知设置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML > 默认值
    /// ENV 前缀：TD，分隔符：__
    /// 示例：TD__API__BASE_URL=https://studio.example.com
    pub fn load(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("TD")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// Check the URLs the gateways will be built from
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url)
            .map_err(|e| TemplateError::config(format!("api.base_url: {}", e)))?;
        if self.gateway.mode == GatewayMode::Feed {
            Url::parse(&self.gateway.feed_url)
                .map_err(|e| TemplateError::config(format!("gateway.feed_url: {}", e)))?;
        }
        if self.api.timeout_secs == 0 {
            return Err(TemplateError::config("api.timeout_secs must be positive"));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| TemplateError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_templates_path")]
    pub templates_path: String,
    #[serde(default = "default_import_path")]
    pub import_path: String,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
    /// `name=value` pair sent as a cookie with every request
    #[serde(default)]
    pub session_cookie: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// 网关配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub mode: GatewayMode,
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Navigation target after a server-side import, `{id}` is replaced
    #[serde(default = "default_course_url_template")]
    pub course_url_template: String,
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
}

/// 面板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_notification_timeout_secs")]
    pub notification_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_templates_path() -> String {
    "/api/templates/".to_string()
}

fn default_import_path() -> String {
    "/api/course_import_api/import/".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_feed_url() -> String {
    "http://localhost:8000/static/templates.json".to_string()
}

fn default_course_url_template() -> String {
    "/course/{id}".to_string()
}

fn default_download_dir() -> String {
    ".".to_string()
}

fn default_organization() -> String {
    "Course".to_string()
}

fn default_notification_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            templates_path: default_templates_path(),
            import_path: default_import_path(),
            csrf_token: String::new(),
            csrf_header: default_csrf_header(),
            session_cookie: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::default(),
            feed_url: default_feed_url(),
            course_url_template: default_course_url_template(),
            download_dir: default_download_dir(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            notification_timeout_secs: default_notification_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
