//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("未知的配置选项 \"{unknown}\", 所属: \"{owner}\", 允许的选项: {allowed}")]
    InvalidOption {
        unknown: String,
        owner: String,
        allowed: String,
    },

    #[error("配置值类型不允许: {path}, 期望类型: {expected}, 实际类型: {actual}")]
    NotAllowedValueType {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("配置值类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("配置类型转换失败: {message}")]
    TypeConversionError { message: String },

    #[error("配置路径无效: {path}, 原因: {message}")]
    InvalidPath { path: String, message: String },

    #[error("配置键不存在: {key}")]
    KeyNotFound { key: String },

    #[error("配置解析失败 ({format}): {source}")]
    ParseError {
        format: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// 创建未知选项错误，键名列表会被排序
    pub fn invalid_option<U, A>(unknown: U, owner: impl Into<String>, allowed: A) -> Self
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self::InvalidOption {
            unknown: sorted_join(unknown),
            owner: owner.into(),
            allowed: sorted_join(allowed),
        }
    }

    /// 创建值类型不允许错误
    pub fn not_allowed_value_type(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::NotAllowedValueType {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 创建类型转换错误
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversionError {
            message: message.into(),
        }
    }

    /// 创建路径错误
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 创建解析错误
    pub fn parse_error(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ParseError {
            format,
            source: Box::new(source),
        }
    }

    /// 为值类型错误补充选项路径
    ///
    /// 其他错误原样返回。
    #[must_use]
    pub fn at_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::NotAllowedValueType {
                expected, actual, ..
            } => Self::NotAllowedValueType {
                path: path.into(),
                expected,
                actual,
            },
            other => other,
        }
    }
}

fn sorted_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut items: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect();
    items.sort();
    items.join(", ")
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
