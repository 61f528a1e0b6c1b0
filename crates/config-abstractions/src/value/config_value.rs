//! 类型化配置值
//!
//! [`ConfigValue`] 包装一个原始值，并提供统一的访问接口：
//!
//! 1. 类型判断：`is_int()`、`is_str()`、`is_dict()` 等
//! 2. 类型化读取：`get_int()` 等，类型不符时返回 [`ConfigError::TypeMismatch`]
//! 3. 安全读取：`get_int_or_none()`、`get_int_or_default(default)` 等
//! 4. 校验写入：`set_raw()` 以及 `set_int()` 等
//! 5. 类型转换：`to_int()`、`to_str()` 等，以及 `to_int_or_none()` 等
//!
//! 原始值本身是已包装的配置值时，所有判断和读取都作用于最内层的原始值。

use crate::option::ConfigOption;
use crate::value::{Callback, ConfigValueFilter, RawDict, RawList, RawValue, ValueType};
use config_tree_common::{ConfigError, ConfigResult};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

static EMPTY_DICT: RawDict = RawDict::new();

/// 值类
///
/// 决定配置值允许的原始类型，以及构建时对原始值的过滤。
#[derive(Clone, Debug)]
pub struct ValueClass {
    name: Cow<'static, str>,
    allowed_type: ValueType,
    filters: Vec<Arc<dyn ConfigValueFilter>>,
}

impl ValueClass {
    /// 默认值类名称
    pub const CONFIG_VALUE: &'static str = "ConfigValue";
    /// 回调渲染值类名称
    pub const CALLBACK_RENDER: &'static str = "CallbackRenderConfigValue";

    /// 创建新的值类
    pub fn new(name: impl Into<Cow<'static, str>>, allowed_type: ValueType) -> Self {
        Self {
            name: name.into(),
            allowed_type,
            filters: Vec::new(),
        }
    }

    /// 接受任意类型的默认值类
    pub fn any() -> Self {
        Self::new(Self::CONFIG_VALUE, ValueType::Any)
    }

    /// 回调渲染值类
    pub fn callback_render() -> Self {
        Self::new(Self::CALLBACK_RENDER, ValueType::Callable)
    }

    /// 添加过滤器
    #[must_use]
    pub fn with_filter(mut self, filter: impl ConfigValueFilter + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// 值类名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 允许的原始类型
    pub const fn allowed_type(&self) -> &ValueType {
        &self.allowed_type
    }

    /// 已注册的过滤器
    pub fn filters(&self) -> &[Arc<dyn ConfigValueFilter>] {
        &self.filters
    }

    /// 是否为回调渲染值类
    pub fn is_callback_render(&self) -> bool {
        self.name == Self::CALLBACK_RENDER
    }

    /// 允许值类根据原始值生成最终值
    fn create_default_raw(&self, raw: RawValue) -> RawValue {
        match raw {
            RawValue::Str(content) if !self.filters.is_empty() => RawValue::Str(
                self.filters
                    .iter()
                    .fold(content, |content, filter| filter.apply_filter(&content)),
            ),
            other => other,
        }
    }
}

impl Default for ValueClass {
    fn default() -> Self {
        Self::any()
    }
}

/// 类型化配置值
#[derive(Clone)]
pub struct ConfigValue {
    raw: RawValue,
    class: ValueClass,
}

impl ConfigValue {
    /// 使用默认值类创建配置值
    pub fn new(raw: impl Into<RawValue>) -> Self {
        Self {
            raw: raw.into(),
            class: ValueClass::any(),
        }
    }

    /// 使用指定值类创建配置值
    ///
    /// 原始值先按值类的允许类型校验，再经过值类的过滤器。
    pub fn with_class(raw: impl Into<RawValue>, class: ValueClass) -> ConfigResult<Self> {
        let raw = raw.into();
        Self::validate_value_type(&raw, class.allowed_type())?;
        let raw = class.create_default_raw(raw);
        Ok(Self { raw, class })
    }

    /// 创建回调渲染值
    pub fn callback_render(callback: Callback) -> Self {
        Self {
            raw: RawValue::Callable(callback),
            class: ValueClass::callback_render(),
        }
    }

    /// 通用类型校验
    pub fn validate_value_type(raw: &RawValue, allowed_type: &ValueType) -> ConfigResult<()> {
        allowed_type.validate(raw)
    }

    /// 原始值
    pub const fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// 取出原始值
    pub fn into_raw(self) -> RawValue {
        self.raw
    }

    /// 值类
    pub const fn class(&self) -> &ValueClass {
        &self.class
    }

    /// 值类名称
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// 是否为回调渲染值
    pub fn is_callback_render(&self) -> bool {
        self.class.is_callback_render()
    }

    /// 以指定选项为参数调用回调
    pub fn render(&self, option: &dyn ConfigOption) -> ConfigResult<RawValue> {
        self.get_callable()?.call(option)
    }

    /// 最内层的配置值
    pub fn resolve_nested(&self) -> &Self {
        match &self.raw {
            RawValue::Value(inner) => inner.resolve_nested(),
            _ => self,
        }
    }

    /// 最内层的原始值
    pub fn nested_raw(&self) -> &RawValue {
        &self.resolve_nested().raw
    }

    /// 作为选项原始值输出
    pub fn to_option_raw_value(&self) -> RawValue {
        self.raw.clone()
    }

    fn mismatch(&self, expected: &str) -> ConfigError {
        ConfigError::type_mismatch(expected, self.nested_raw().type_name())
    }

    // 类型判断

    /// 是否为布尔值
    pub fn is_bool(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Bool(_))
    }

    /// 是否为字节串
    pub fn is_bytes(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Bytes(_))
    }

    /// 是否为可调用对象
    pub fn is_callable(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Callable(_))
    }

    /// 是否为字典
    pub fn is_dict(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Dict(_))
    }

    /// 是否为浮点数
    pub fn is_float(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Float(_))
    }

    /// 是否为整数
    pub fn is_int(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Int(_))
    }

    /// 是否为列表
    pub fn is_list(&self) -> bool {
        matches!(self.nested_raw(), RawValue::List(_))
    }

    /// 是否为字符串
    pub fn is_str(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Str(_))
    }

    /// 原始值是否为空值（不解析内层）
    pub const fn is_none(&self) -> bool {
        self.raw.is_null()
    }

    /// 是否为"空"：空值、空容器、空字符串、零或 false
    pub fn is_empty(&self) -> bool {
        match self.nested_raw() {
            RawValue::Null => true,
            RawValue::Bool(value) => !value,
            RawValue::Int(value) => *value == 0,
            RawValue::Float(value) => *value == 0.0,
            RawValue::Str(value) => value.is_empty(),
            RawValue::Bytes(value) => value.is_empty(),
            RawValue::List(value) => value.is_empty(),
            RawValue::Dict(value) => value.is_empty(),
            RawValue::Callable(_) | RawValue::Value(_) => false,
        }
    }

    /// 按真值规则判断为真
    pub fn is_true(&self) -> bool {
        self.to_bool_or_none() == Some(true)
    }

    /// 是否为 false 布尔值
    pub fn is_false(&self) -> bool {
        matches!(self.nested_raw(), RawValue::Bool(false))
    }

    /// 列表中是否包含指定值，非列表时返回 false
    pub fn has_item_in_list(&self, value: &RawValue) -> bool {
        self.get_list().is_ok_and(|items| items.contains(value))
    }

    /// 字典中是否包含指定键，非字典时返回 false
    pub fn has_key_in_dict(&self, key: &str) -> bool {
        self.get_dict().is_ok_and(|entries| entries.contains_key(key))
    }

    // 类型化读取

    /// 读取布尔值
    pub fn get_bool(&self) -> ConfigResult<bool> {
        match self.nested_raw() {
            RawValue::Bool(value) => Ok(*value),
            _ => Err(self.mismatch("bool")),
        }
    }

    /// 读取字节串
    pub fn get_bytes(&self) -> ConfigResult<&[u8]> {
        match self.nested_raw() {
            RawValue::Bytes(value) => Ok(value),
            _ => Err(self.mismatch("bytes")),
        }
    }

    /// 读取可调用对象
    pub fn get_callable(&self) -> ConfigResult<&Callback> {
        match self.nested_raw() {
            RawValue::Callable(value) => Ok(value),
            _ => Err(self.mismatch("Callable")),
        }
    }

    /// 读取字典
    pub fn get_dict(&self) -> ConfigResult<&RawDict> {
        match self.nested_raw() {
            RawValue::Dict(value) => Ok(value),
            _ => Err(self.mismatch("dict")),
        }
    }

    /// 读取浮点数
    pub fn get_float(&self) -> ConfigResult<f64> {
        match self.nested_raw() {
            RawValue::Float(value) => Ok(*value),
            _ => Err(self.mismatch("float")),
        }
    }

    /// 读取整数
    pub fn get_int(&self) -> ConfigResult<i64> {
        match self.nested_raw() {
            RawValue::Int(value) => Ok(*value),
            _ => Err(self.mismatch("int")),
        }
    }

    /// 读取列表
    pub fn get_list(&self) -> ConfigResult<&RawList> {
        match self.nested_raw() {
            RawValue::List(value) => Ok(value),
            _ => Err(self.mismatch("list")),
        }
    }

    /// 读取字符串
    pub fn get_str(&self) -> ConfigResult<&str> {
        match self.nested_raw() {
            RawValue::Str(value) => Ok(value),
            _ => Err(self.mismatch("str")),
        }
    }

    // 安全读取

    /// 读取布尔值，类型不符返回 None
    pub fn get_bool_or_none(&self) -> Option<bool> {
        self.get_bool().ok()
    }

    /// 读取布尔值，类型不符返回默认值
    pub fn get_bool_or_default(&self, default: bool) -> bool {
        self.get_bool().unwrap_or(default)
    }

    /// 读取字节串，类型不符返回 None
    pub fn get_bytes_or_none(&self) -> Option<&[u8]> {
        self.get_bytes().ok()
    }

    /// 读取可调用对象，类型不符返回 None
    pub fn get_callable_or_none(&self) -> Option<&Callback> {
        self.get_callable().ok()
    }

    /// 读取字典，类型不符返回 None
    pub fn get_dict_or_none(&self) -> Option<&RawDict> {
        self.get_dict().ok()
    }

    /// 读取字典，类型不符返回默认值
    pub fn get_dict_or_default<'a>(&'a self, default: &'a RawDict) -> &'a RawDict {
        self.get_dict().unwrap_or(default)
    }

    /// 读取字典，类型不符返回空字典
    pub fn get_dict_or_empty(&self) -> &RawDict {
        self.get_dict_or_default(&EMPTY_DICT)
    }

    /// 读取浮点数，类型不符返回 None
    pub fn get_float_or_none(&self) -> Option<f64> {
        self.get_float().ok()
    }

    /// 读取浮点数，类型不符返回默认值
    pub fn get_float_or_default(&self, default: f64) -> f64 {
        self.get_float().unwrap_or(default)
    }

    /// 读取整数，类型不符返回 None
    pub fn get_int_or_none(&self) -> Option<i64> {
        self.get_int().ok()
    }

    /// 读取整数，类型不符返回默认值
    pub fn get_int_or_default(&self, default: i64) -> i64 {
        self.get_int().unwrap_or(default)
    }

    /// 读取列表，类型不符返回 None
    pub fn get_list_or_none(&self) -> Option<&RawList> {
        self.get_list().ok()
    }

    /// 读取列表，类型不符返回默认值
    pub fn get_list_or_default<'a>(&'a self, default: &'a [RawValue]) -> &'a [RawValue] {
        self.get_list().map_or(default, Vec::as_slice)
    }

    /// 读取列表，类型不符返回空切片
    pub fn get_list_or_empty(&self) -> &[RawValue] {
        self.get_list_or_default(&[])
    }

    /// 读取字符串，类型不符返回 None
    pub fn get_str_or_none(&self) -> Option<&str> {
        self.get_str().ok()
    }

    /// 读取字符串，类型不符返回默认值
    pub fn get_str_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        self.get_str().unwrap_or(default)
    }

    // 校验写入

    /// 写入原始值，按值类校验并过滤
    pub fn set_raw(&mut self, raw: impl Into<RawValue>) -> ConfigResult<()> {
        let raw = raw.into();
        Self::validate_value_type(&raw, self.class.allowed_type())?;
        self.raw = self.class.create_default_raw(raw);
        Ok(())
    }

    /// 写入布尔值
    pub fn set_bool(&mut self, value: bool) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入字节串
    pub fn set_bytes(&mut self, value: Vec<u8>) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入可调用对象
    pub fn set_callable(&mut self, value: Callback) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入字典
    pub fn set_dict(&mut self, value: RawDict) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入浮点数
    pub fn set_float(&mut self, value: f64) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入整数
    pub fn set_int(&mut self, value: i64) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入列表
    pub fn set_list(&mut self, value: RawList) -> ConfigResult<()> {
        self.set_raw(value)
    }

    /// 写入字符串
    pub fn set_str(&mut self, value: impl Into<String>) -> ConfigResult<()> {
        self.set_raw(value.into())
    }

    // 类型转换

    /// 按真值规则转换为布尔值
    pub fn to_bool(&self) -> bool {
        self.nested_raw().is_truthy()
    }

    /// 转换为布尔值，空值返回 None
    pub fn to_bool_or_none(&self) -> Option<bool> {
        if self.is_none() {
            None
        } else {
            Some(self.to_bool())
        }
    }

    /// 转换为字节串
    pub fn to_bytes(&self) -> ConfigResult<Vec<u8>> {
        match self.nested_raw() {
            RawValue::Bytes(value) => Ok(value.clone()),
            RawValue::Str(value) => Ok(value.as_bytes().to_vec()),
            other => Err(ConfigError::type_conversion(format!(
                "无法将 {} 转换为 bytes",
                other.type_name()
            ))),
        }
    }

    /// 转换为字节串，空值返回 None
    pub fn to_bytes_or_none(&self) -> ConfigResult<Option<Vec<u8>>> {
        self.or_none(Self::to_bytes)
    }

    /// 转换为字典
    ///
    /// 字典原样返回；由 `[键, 值]` 二元列表组成的列表按键值对转换。
    pub fn to_dict(&self) -> ConfigResult<RawDict> {
        match self.nested_raw() {
            RawValue::Dict(value) => Ok(value.clone()),
            RawValue::List(items) => items
                .iter()
                .map(|item| match item.as_list().map(Vec::as_slice) {
                    Some([RawValue::Str(key), value]) => Ok((key.clone(), value.clone())),
                    _ => Err(ConfigError::type_conversion(format!(
                        "列表元素 {item} 不是 [键, 值] 对"
                    ))),
                })
                .collect(),
            other => Err(ConfigError::type_conversion(format!(
                "无法将 {} 转换为 dict",
                other.type_name()
            ))),
        }
    }

    /// 转换为字典，空值返回 None
    pub fn to_dict_or_none(&self) -> ConfigResult<Option<RawDict>> {
        self.or_none(Self::to_dict)
    }

    /// 转换为浮点数
    pub fn to_float(&self) -> ConfigResult<f64> {
        match self.nested_raw() {
            RawValue::Float(value) => Ok(*value),
            #[allow(clippy::cast_precision_loss)]
            RawValue::Int(value) => Ok(*value as f64),
            RawValue::Bool(value) => Ok(if *value { 1.0 } else { 0.0 }),
            RawValue::Str(value) => value.trim().parse::<f64>().map_err(|e| {
                ConfigError::type_conversion(format!("无法将 \"{value}\" 转换为 float: {e}"))
            }),
            other => Err(ConfigError::type_conversion(format!(
                "无法将 {} 转换为 float",
                other.type_name()
            ))),
        }
    }

    /// 转换为浮点数，空值返回 None
    pub fn to_float_or_none(&self) -> ConfigResult<Option<f64>> {
        self.or_none(Self::to_float)
    }

    /// 转换为整数，浮点数向零截断
    pub fn to_int(&self) -> ConfigResult<i64> {
        match self.nested_raw() {
            RawValue::Int(value) => Ok(*value),
            RawValue::Bool(value) => Ok(i64::from(*value)),
            #[allow(clippy::cast_possible_truncation)]
            RawValue::Float(value) if value.is_finite() => Ok(value.trunc() as i64),
            RawValue::Str(value) => value.trim().parse::<i64>().map_err(|e| {
                ConfigError::type_conversion(format!("无法将 \"{value}\" 转换为 int: {e}"))
            }),
            other => Err(ConfigError::type_conversion(format!(
                "无法将 {other} ({}) 转换为 int",
                other.type_name()
            ))),
        }
    }

    /// 转换为整数，空值返回 None
    pub fn to_int_or_none(&self) -> ConfigResult<Option<i64>> {
        self.or_none(Self::to_int)
    }

    /// 转换为列表
    ///
    /// 字典转换为键列表，字符串转换为字符列表，字节串转换为整数列表。
    pub fn to_list(&self) -> ConfigResult<RawList> {
        match self.nested_raw() {
            RawValue::List(value) => Ok(value.clone()),
            RawValue::Dict(value) => Ok(value.keys().map(|key| RawValue::from(key.as_str())).collect()),
            RawValue::Str(value) => Ok(value.chars().map(|c| RawValue::Str(c.to_string())).collect()),
            RawValue::Bytes(value) => Ok(value.iter().map(|b| RawValue::Int(i64::from(*b))).collect()),
            other => Err(ConfigError::type_conversion(format!(
                "无法将 {} 转换为 list",
                other.type_name()
            ))),
        }
    }

    /// 转换为列表，空值返回 None
    pub fn to_list_or_none(&self) -> ConfigResult<Option<RawList>> {
        self.or_none(Self::to_list)
    }

    /// 转换为字符串，容器按 JSON 渲染
    pub fn to_str(&self) -> String {
        self.nested_raw().to_string()
    }

    /// 转换为字符串，空值返回 None
    pub fn to_str_or_none(&self) -> Option<String> {
        if self.is_none() {
            None
        } else {
            Some(self.to_str())
        }
    }

    fn or_none<T>(&self, convert: impl FnOnce(&Self) -> ConfigResult<T>) -> ConfigResult<Option<T>> {
        if self.is_none() {
            Ok(None)
        } else {
            convert(self).map(Some)
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::new(RawValue::Null)
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        self.class.name() == other.class.name() && self.raw == other.raw
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}(type={}, value={})>",
            self.class.name(),
            self.raw.type_name(),
            self.raw
        )
    }
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<RawValue> for ConfigValue {
    fn from(raw: RawValue) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TrimConfigValueFilter;

    #[test]
    fn test_str_value_checks_and_conversions() {
        let value = ConfigValue::new("123");

        assert!(value.is_str());
        assert_eq!(value.get_str().unwrap(), "123");
        assert_eq!(value.to_int().unwrap(), 123);
        assert_eq!(value.get_int_or_default(0), 0);
        assert!(value.get_int_or_none().is_none());
        assert!(matches!(
            value.get_int(),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_with_class_validates_raw() {
        let class = ValueClass::new("CustomTypeConfigValue", ValueType::Str);

        assert!(ConfigValue::with_class(123, class.clone()).is_err());
        let value = ConfigValue::with_class("yeah", class).unwrap();
        assert_eq!(value.class_name(), "CustomTypeConfigValue");
        assert_eq!(value.get_str().unwrap(), "yeah");
    }

    #[test]
    fn test_filters_apply_on_construction_and_set() {
        let class = ValueClass::new("TrimmedValue", ValueType::Str).with_filter(TrimConfigValueFilter);
        let mut value = ConfigValue::with_class("  padded  ", class).unwrap();

        assert_eq!(value.get_str().unwrap(), "padded");
        value.set_str(" again ").unwrap();
        assert_eq!(value.get_str().unwrap(), "again");
        assert!(value.set_int(1).is_err());
    }

    #[test]
    fn test_nested_value_resolves_inner_raw() {
        let inner = ConfigValue::new(RawValue::dict([("key", 1)]));
        let outer = ConfigValue::new(inner);

        assert!(outer.is_dict());
        assert!(outer.has_key_in_dict("key"));
        assert!(!outer.has_key_in_dict("missing"));
        assert_eq!(outer.to_dict().unwrap().len(), 1);
        assert!(!outer.has_item_in_list(&RawValue::Int(1)));
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigValue::new(RawValue::Null).is_empty());
        assert!(ConfigValue::new("").is_empty());
        assert!(ConfigValue::new(0).is_empty());
        assert!(ConfigValue::new(false).is_empty());
        assert!(ConfigValue::new(RawValue::List(vec![])).is_empty());
        assert!(!ConfigValue::new("x").is_empty());
        assert!(!ConfigValue::new(RawValue::list([0])).is_empty());
    }

    #[test]
    fn test_bool_is_not_int() {
        let value = ConfigValue::new(true);

        assert!(value.is_bool());
        assert!(!value.is_int());
        assert!(value.get_int().is_err());
        assert_eq!(value.to_int().unwrap(), 1);
        assert!(!ValueType::Int.accepts(&RawValue::Bool(true)));
    }

    #[test]
    fn test_truthiness() {
        assert!(ConfigValue::new(true).is_true());
        assert!(ConfigValue::new("yes").is_true());
        assert!(!ConfigValue::new(RawValue::Null).is_true());
        assert!(ConfigValue::new(false).is_false());
        assert!(!ConfigValue::new(0).is_false());
        assert_eq!(ConfigValue::new(RawValue::Null).to_bool_or_none(), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ConfigValue::new(3.9).to_int().unwrap(), 3);
        assert_eq!(ConfigValue::new(-3.9).to_int().unwrap(), -3);
        assert_eq!(ConfigValue::new(" 1.5 ").to_float().unwrap(), 1.5);
        assert_eq!(ConfigValue::new(2).to_float().unwrap(), 2.0);
        assert_eq!(ConfigValue::new(12).to_str(), "12");
        assert_eq!(ConfigValue::new(RawValue::list([1, 2])).to_str(), "[1,2]");
        assert!(ConfigValue::new("abc").to_int().is_err());
        assert_eq!(ConfigValue::new(RawValue::Null).to_int_or_none().unwrap(), None);
        assert_eq!(ConfigValue::new(RawValue::Null).to_str_or_none(), None);

        let keys = ConfigValue::new(RawValue::dict([("a", 1), ("b", 2)]))
            .to_list()
            .unwrap();
        assert_eq!(keys, vec![RawValue::from("a"), RawValue::from("b")]);

        let pairs = ConfigValue::new(RawValue::list([RawValue::list([
            RawValue::from("k"),
            RawValue::from(1),
        ])]))
        .to_dict()
        .unwrap();
        assert_eq!(pairs["k"], RawValue::Int(1));
        assert!(ConfigValue::new(1).to_dict().is_err());
    }

    #[test]
    fn test_safe_getters_with_defaults() {
        let value = ConfigValue::new(42);

        assert!(value.get_dict_or_empty().is_empty());
        assert!(value.get_list_or_empty().is_empty());
        assert_eq!(value.get_str_or_default("fallback"), "fallback");
        assert_eq!(value.get_float_or_default(1.0), 1.0);
        assert_eq!(value.get_int_or_none(), Some(42));
    }

    #[test]
    fn test_display() {
        let value = ConfigValue::new("yes");
        assert_eq!(value.to_string(), "<ConfigValue(type=str, value=yes)>");
    }

    #[test]
    fn test_callback_render() {
        let value = ConfigValue::callback_render(Callback::new(|option| {
            Ok(RawValue::from(format!("rendered-{}", option.key())))
        }));

        assert!(value.is_callback_render());
        assert!(value.is_callable());
    }
}
