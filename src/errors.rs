//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 每个变体都是一个封闭的错误种类，调用方通过 match 区分，而不是解析消息文本。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schoolhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolHubError {
            $($variant(String),)*
        }

        impl SchoolHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schoolhub_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Transaction("E004", "Transaction Error"),
    TransactionTimeout("E005", "Transaction Timeout"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    Serialization("E008", "Serialization Error"),
    Authentication("E009", "Authentication Error"),
    StudentNotFound("E101", "Student Not Found"),
    AssignmentNotFound("E102", "Assignment Not Found"),
    SubmissionNotFound("E103", "Submission Not Found"),
    SubmissionAlreadyExists("E104", "Submission Already Exists"),
    SubmissionAlreadyGraded("E105", "Submission Already Graded"),
}

impl SchoolHubError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为资源不存在类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SchoolHubError::StudentNotFound(_)
                | SchoolHubError::AssignmentNotFound(_)
                | SchoolHubError::SubmissionNotFound(_)
        )
    }

    /// 是否为状态冲突类错误
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            SchoolHubError::SubmissionAlreadyExists(_) | SchoolHubError::SubmissionAlreadyGraded(_)
        )
    }
}

impl fmt::Display for SchoolHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolHubError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolHubError {
    fn from(err: std::io::Error) -> Self {
        SchoolHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolHubError {
    fn from(err: serde_json::Error) -> Self {
        SchoolHubError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolHubError>;
