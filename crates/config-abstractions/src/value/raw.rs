//! 原始配置值
//!
//! 未类型化的字典数据，配置树从这里构建，`dump` 时也回到这里。

use crate::option::ConfigOption;
use crate::value::ConfigValue;
use config_tree_common::ConfigResult;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// 原始字典（键为字符串）
pub type RawDict = BTreeMap<String, RawValue>;

/// 原始列表
pub type RawList = Vec<RawValue>;

type CallbackFn = dyn Fn(&dyn ConfigOption) -> ConfigResult<RawValue> + Send + Sync;

/// 延迟绑定的回调值
///
/// 回调在所属的嵌套选项创建子选项之前被调用，参数为该嵌套选项。
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    /// 创建新的回调
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&dyn ConfigOption) -> ConfigResult<RawValue> + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// 调用回调
    pub fn call(&self, option: &dyn ConfigOption) -> ConfigResult<RawValue> {
        (self.0)(option)
    }

    /// 是否为同一个回调
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(<function>)")
    }
}

/// 原始配置值
#[derive(Clone, Debug, Default)]
pub enum RawValue {
    /// 空值
    #[default]
    Null,
    /// 布尔值
    Bool(bool),
    /// 整数
    Int(i64),
    /// 浮点数
    Float(f64),
    /// 字符串
    Str(String),
    /// 字节串
    Bytes(Vec<u8>),
    /// 列表
    List(RawList),
    /// 字典
    Dict(RawDict),
    /// 可调用对象
    Callable(Callback),
    /// 已包装的配置值
    Value(Box<ConfigValue>),
}

impl RawValue {
    /// 从键值对构建字典
    pub fn dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// 从元素构建列表
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// 创建回调值
    pub fn callable<F>(callback: F) -> Self
    where
        F: Fn(&dyn ConfigOption) -> ConfigResult<Self> + Send + Sync + 'static,
    {
        Self::Callable(Callback::new(callback))
    }

    /// 类型名称，用于错误信息
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Callable(_) => "Callable",
            Self::Value(value) => value.class_name(),
        }
    }

    /// 是否为空值
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 获取字符串
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// 获取字典
    pub const fn as_dict(&self) -> Option<&RawDict> {
        match self {
            Self::Dict(value) => Some(value),
            _ => None,
        }
    }

    /// 获取列表
    pub const fn as_list(&self) -> Option<&RawList> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    /// 获取已包装的配置值
    pub fn as_config_value(&self) -> Option<&ConfigValue> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// 真值判断
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Str(value) => !value.is_empty(),
            Self::Bytes(value) => !value.is_empty(),
            Self::List(value) => !value.is_empty(),
            Self::Dict(value) => !value.is_empty(),
            Self::Callable(_) => true,
            Self::Value(value) => value.nested_raw().is_truthy(),
        }
    }

    /// 转换为 JSON 值
    ///
    /// 可调用对象和非有限浮点数转换为 `null`，字节串转换为整数数组。
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Null | Self::Callable(_) => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Int(value) => Value::from(*value),
            Self::Float(value) => serde_json::Number::from_f64(*value)
                .map_or(Value::Null, Value::Number),
            Self::Str(value) => Value::String(value.clone()),
            Self::Bytes(value) => Value::Array(value.iter().map(|b| Value::from(*b)).collect()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Dict(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Value(value) => value.raw().to_json(),
        }
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a.ptr_eq(b),
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Bytes(value) => f.write_str(&String::from_utf8_lossy(value)),
            Self::Callable(_) => f.write_str("<callable>"),
            Self::Value(value) => write!(f, "{}", value.nested_raw()),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::Callable(_) => serializer.serialize_none(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(value) => serializer.serialize_str(value),
            Self::Bytes(value) => serializer.serialize_bytes(value),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Value(value) => value.raw().serialize(serializer),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<RawList> for RawValue {
    fn from(value: RawList) -> Self {
        Self::List(value)
    }
}

impl From<RawDict> for RawValue {
    fn from(value: RawDict) -> Self {
        Self::Dict(value)
    }
}

impl From<Callback> for RawValue {
    fn from(value: Callback) -> Self {
        Self::Callable(value)
    }
}

impl From<ConfigValue> for RawValue {
    fn from(value: ConfigValue) -> Self {
        Self::Value(Box::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => number.as_i64().map_or_else(
                || Self::Float(number.as_f64().unwrap_or(f64::NAN)),
                Self::Int,
            ),
            Value::String(value) => Self::Str(value),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Dict(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
