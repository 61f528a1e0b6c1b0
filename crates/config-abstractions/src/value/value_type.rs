//! 值类型描述与校验

use crate::value::RawValue;
use config_tree_common::{ConfigError, ConfigResult};
use std::borrow::Cow;
use std::fmt;

/// 允许的原始值类型
///
/// 显示格式沿用 typing 风格，如 `list[dict[str, Any]]`、`str | dict[str, Any]`。
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ValueType {
    /// 任意类型
    #[default]
    Any,
    /// 空值
    Null,
    /// 布尔值
    Bool,
    /// 整数
    Int,
    /// 浮点数（不接受整数）
    Float,
    /// 字符串
    Str,
    /// 字节串
    Bytes,
    /// 可调用对象
    Callable,
    /// 元素类型一致的列表
    List(Box<ValueType>),
    /// 字符串键、值类型一致的字典
    Dict(Box<ValueType>),
    /// 联合类型
    Union(Vec<ValueType>),
    /// 指定值类名称的已包装配置值
    Wrapped(Cow<'static, str>),
}

impl ValueType {
    /// 任意元素的列表
    pub fn list() -> Self {
        Self::List(Box::new(Self::Any))
    }

    /// 指定元素类型的列表
    pub fn list_of(item: Self) -> Self {
        Self::List(Box::new(item))
    }

    /// 任意值的字典
    pub fn dict() -> Self {
        Self::Dict(Box::new(Self::Any))
    }

    /// 指定值类型的字典
    pub fn dict_of(value: Self) -> Self {
        Self::Dict(Box::new(value))
    }

    /// 联合类型
    pub fn union<I: IntoIterator<Item = Self>>(variants: I) -> Self {
        Self::Union(variants.into_iter().collect())
    }

    /// 已包装的配置值类型
    pub fn wrapped(class_name: impl Into<Cow<'static, str>>) -> Self {
        Self::Wrapped(class_name.into())
    }

    /// 允许空值
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::Union(mut variants) => {
                if !variants.contains(&Self::Null) {
                    variants.push(Self::Null);
                }
                Self::Union(variants)
            }
            Self::Any | Self::Null => self,
            other => Self::Union(vec![other, Self::Null]),
        }
    }

    /// 判断原始值是否满足类型
    pub fn accepts(&self, raw: &RawValue) -> bool {
        match self {
            Self::Any => true,
            Self::Null => matches!(raw, RawValue::Null),
            Self::Bool => matches!(raw, RawValue::Bool(_)),
            Self::Int => matches!(raw, RawValue::Int(_)),
            Self::Float => matches!(raw, RawValue::Float(_)),
            Self::Str => matches!(raw, RawValue::Str(_)),
            Self::Bytes => matches!(raw, RawValue::Bytes(_)),
            Self::Callable => matches!(raw, RawValue::Callable(_)),
            Self::List(item) => match raw {
                RawValue::List(items) => items.iter().all(|value| item.accepts(value)),
                _ => false,
            },
            Self::Dict(value_type) => match raw {
                RawValue::Dict(entries) => entries.values().all(|value| value_type.accepts(value)),
                _ => false,
            },
            Self::Union(variants) => variants.iter().any(|variant| variant.accepts(raw)),
            Self::Wrapped(class_name) => match raw {
                RawValue::Value(value) => value.class_name() == &**class_name,
                _ => false,
            },
        }
    }

    /// 校验原始值，失败时返回 [`ConfigError::NotAllowedValueType`]
    pub fn validate(&self, raw: &RawValue) -> ConfigResult<()> {
        if self.accepts(raw) {
            Ok(())
        } else {
            Err(ConfigError::not_allowed_value_type(
                "",
                self.to_string(),
                raw.type_name(),
            ))
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Null => f.write_str("None"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("str"),
            Self::Bytes => f.write_str("bytes"),
            Self::Callable => f.write_str("Callable"),
            Self::List(item) => write!(f, "list[{item}]"),
            Self::Dict(value) => write!(f, "dict[str, {value}]"),
            Self::Union(variants) => {
                let rendered: Vec<String> = variants.iter().map(ToString::to_string).collect();
                f.write_str(&rendered.join(" | "))
            }
            Self::Wrapped(class_name) => f.write_str(class_name),
        }
    }
}
