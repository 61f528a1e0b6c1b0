//! 文本配置解析
//!
//! 将 JSON、YAML、TOML 文本解析为原始配置值，只处理字符串，不读取文件。

use config_abstractions::RawValue;
use config_tree_common::{ConfigError, ConfigResult};
use tracing::debug;

/// 文本格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// TOML
    Toml,
}

impl SourceFormat {
    /// 根据扩展名识别格式
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// 格式名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }

    /// 解析文本
    pub fn parse(self, content: &str) -> ConfigResult<RawValue> {
        debug!("解析 {} 配置文本 ({} 字节)", self.name(), content.len());
        match self {
            Self::Json => parse_json_str(content),
            Self::Yaml => parse_yaml_str(content),
            Self::Toml => parse_toml_str(content),
        }
    }
}

/// 解析 JSON 文本
pub fn parse_json_str(content: &str) -> ConfigResult<RawValue> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ConfigError::parse_error("JSON", e))?;
    Ok(RawValue::from(value))
}

/// 解析 YAML 文本
pub fn parse_yaml_str(content: &str) -> ConfigResult<RawValue> {
    let value: serde_json::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse_error("YAML", e))?;
    Ok(RawValue::from(value))
}

/// 解析 TOML 文本
pub fn parse_toml_str(content: &str) -> ConfigResult<RawValue> {
    let value: toml::Value =
        toml::from_str(content).map_err(|e| ConfigError::parse_error("TOML", e))?;
    Ok(toml_to_raw(value))
}

/// 将 TOML 值转换为原始值，日期时间转换为字符串
fn toml_to_raw(value: toml::Value) -> RawValue {
    match value {
        toml::Value::String(s) => RawValue::Str(s),
        toml::Value::Integer(i) => RawValue::Int(i),
        toml::Value::Float(f) => RawValue::Float(f),
        toml::Value::Boolean(b) => RawValue::Bool(b),
        toml::Value::Array(items) => RawValue::List(items.into_iter().map(toml_to_raw).collect()),
        toml::Value::Table(table) => RawValue::Dict(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_raw(value)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => RawValue::Str(dt.to_string()),
    }
}
