use std::fmt;

#[derive(Debug, Clone)]
pub enum TemplateError {
    Validation(String),
    Network(String),
    Http { status: u16, body: String },
    Unexpected(String),
    Config(String),
    Serialization(String),
    FileOperation(String),
    Unsupported(String),
    /// The context that issued a request no longer exists; callers drop the result.
    Detached,
}

impl TemplateError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::Validation(_) => "E001",
            TemplateError::Network(_) => "E002",
            TemplateError::Http { .. } => "E003",
            TemplateError::Unexpected(_) => "E004",
            TemplateError::Config(_) => "E005",
            TemplateError::Serialization(_) => "E006",
            TemplateError::FileOperation(_) => "E007",
            TemplateError::Unsupported(_) => "E008",
            TemplateError::Detached => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TemplateError::Validation(_) => "Validation Error",
            TemplateError::Network(_) => "Network Error",
            TemplateError::Http { .. } => "HTTP Error",
            TemplateError::Unexpected(_) => "Unexpected Error",
            TemplateError::Config(_) => "Configuration Error",
            TemplateError::Serialization(_) => "Serialization Error",
            TemplateError::FileOperation(_) => "File Operation Error",
            TemplateError::Unsupported(_) => "Unsupported Operation",
            TemplateError::Detached => "Detached",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            TemplateError::Validation(msg)
            | TemplateError::Network(msg)
            | TemplateError::Unexpected(msg)
            | TemplateError::Config(msg)
            | TemplateError::Serialization(msg)
            | TemplateError::FileOperation(msg)
            | TemplateError::Unsupported(msg) => msg.clone(),
            TemplateError::Http { status, body } if body.is_empty() => {
                format!("status {}", status)
            }
            TemplateError::Http { status, body } => format!("status {}: {}", status, body),
            TemplateError::Detached => "owning context was dropped".to_string(),
        }
    }

    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            TemplateError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error should be ignored by the caller instead of surfaced
    pub fn is_detached(&self) -> bool {
        matches!(self, TemplateError::Detached)
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于通知与 TUI）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TemplateError {}

// 便捷的构造函数
impl TemplateError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TemplateError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        TemplateError::Network(msg.into())
    }

    pub fn http<T: Into<String>>(status: u16, body: T) -> Self {
        TemplateError::Http {
            status,
            body: body.into(),
        }
    }

    pub fn unexpected<T: Into<String>>(msg: T) -> Self {
        TemplateError::Unexpected(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        TemplateError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TemplateError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TemplateError::FileOperation(msg.into())
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        TemplateError::Unsupported(msg.into())
    }
}

impl From<reqwest::Error> for TemplateError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TemplateError::http(status.as_u16(), String::new())
        } else if err.is_decode() {
            TemplateError::Serialization(err.to_string())
        } else if err.is_builder() {
            TemplateError::Config(err.to_string())
        } else {
            TemplateError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        TemplateError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for TemplateError {
    fn from(err: url::ParseError) -> Self {
        TemplateError::Config(format!("invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
