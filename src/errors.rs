use std::fmt;

#[derive(Debug, Clone)]
pub enum ScriptHostError {
    FileOperation(String),
    ScriptCompile(String),
    ScriptExecute(String),
    Engine(String),
    Config(String),
}

impl ScriptHostError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ScriptHostError::FileOperation(_) => "E001",
            ScriptHostError::ScriptCompile(_) => "E002",
            ScriptHostError::ScriptExecute(_) => "E003",
            ScriptHostError::Engine(_) => "E004",
            ScriptHostError::Config(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ScriptHostError::FileOperation(_) => "File Operation Error",
            ScriptHostError::ScriptCompile(_) => "Script Compile Error",
            ScriptHostError::ScriptExecute(_) => "Script Execute Error",
            ScriptHostError::Engine(_) => "Engine Error",
            ScriptHostError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ScriptHostError::FileOperation(msg) => msg,
            ScriptHostError::ScriptCompile(msg) => msg,
            ScriptHostError::ScriptExecute(msg) => msg,
            ScriptHostError::Engine(msg) => msg,
            ScriptHostError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ScriptHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ScriptHostError {}

// 便捷的构造函数
impl ScriptHostError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ScriptHostError::FileOperation(msg.into())
    }

    pub fn script_compile<T: Into<String>>(msg: T) -> Self {
        ScriptHostError::ScriptCompile(msg.into())
    }

    pub fn script_execute<T: Into<String>>(msg: T) -> Self {
        ScriptHostError::ScriptExecute(msg.into())
    }

    pub fn engine<T: Into<String>>(msg: T) -> Self {
        ScriptHostError::Engine(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ScriptHostError::Config(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ScriptHostError {
    fn from(err: std::io::Error) -> Self {
        ScriptHostError::FileOperation(err.to_string())
    }
}

impl From<toml::de::Error> for ScriptHostError {
    fn from(err: toml::de::Error) -> Self {
        ScriptHostError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScriptHostError>;
