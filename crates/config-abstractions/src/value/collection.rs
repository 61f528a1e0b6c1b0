//! 配置值集合

use crate::value::{ConfigValue, RawDict, RawList, RawValue};
use config_tree_common::ConfigResult;
use std::ops::Index;

/// 有序的配置值集合
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigValueCollection {
    items: Vec<ConfigValue>,
}

impl ConfigValueCollection {
    /// 创建空集合
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 从原始值创建集合
    pub fn from_raw_values<I: IntoIterator<Item = RawValue>>(values: I) -> Self {
        Self {
            items: values.into_iter().map(ConfigValue::new).collect(),
        }
    }

    /// 从配置值创建集合
    pub fn from_config_values<I: IntoIterator<Item = ConfigValue>>(values: I) -> Self {
        Self {
            items: values.into_iter().collect(),
        }
    }

    /// 追加一个配置值
    pub fn append(&mut self, value: ConfigValue) {
        self.items.push(value);
    }

    /// 追加多个配置值
    pub fn extend<I: IntoIterator<Item = ConfigValue>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按下标读取
    pub fn get(&self, index: usize) -> Option<&ConfigValue> {
        self.items.get(index)
    }

    /// 迭代器
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigValue> {
        self.items.iter()
    }

    /// 对每个元素应用函数
    pub fn map<T, F: FnMut(&ConfigValue) -> T>(&self, func: F) -> Vec<T> {
        self.items.iter().map(func).collect()
    }

    // 严格读取，遇到第一个类型不符的元素即失败

    /// 全部读取为字符串
    pub fn get_str_collection(&self) -> ConfigResult<Vec<String>> {
        self.items
            .iter()
            .map(|item| item.get_str().map(str::to_string))
            .collect()
    }

    /// 全部读取为整数
    pub fn get_int_collection(&self) -> ConfigResult<Vec<i64>> {
        self.items.iter().map(ConfigValue::get_int).collect()
    }

    /// 全部读取为浮点数
    pub fn get_float_collection(&self) -> ConfigResult<Vec<f64>> {
        self.items.iter().map(ConfigValue::get_float).collect()
    }

    /// 全部读取为布尔值
    pub fn get_bool_collection(&self) -> ConfigResult<Vec<bool>> {
        self.items.iter().map(ConfigValue::get_bool).collect()
    }

    /// 全部读取为字典
    pub fn get_dict_collection(&self) -> ConfigResult<Vec<RawDict>> {
        self.items
            .iter()
            .map(|item| item.get_dict().cloned())
            .collect()
    }

    /// 全部读取为列表
    pub fn get_list_collection(&self) -> ConfigResult<Vec<RawList>> {
        self.items
            .iter()
            .map(|item| item.get_list().cloned())
            .collect()
    }

    // 宽松读取

    /// 读取为字符串，类型不符的元素为 None
    pub fn get_str_or_none_collection(&self) -> Vec<Option<String>> {
        self.map(|item| item.get_str_or_none().map(str::to_string))
    }

    /// 读取为整数，类型不符的元素为 None
    pub fn get_int_or_none_collection(&self) -> Vec<Option<i64>> {
        self.map(ConfigValue::get_int_or_none)
    }

    /// 读取为浮点数，类型不符的元素为 None
    pub fn get_float_or_none_collection(&self) -> Vec<Option<f64>> {
        self.map(ConfigValue::get_float_or_none)
    }

    /// 读取为布尔值，类型不符的元素为 None
    pub fn get_bool_or_none_collection(&self) -> Vec<Option<bool>> {
        self.map(ConfigValue::get_bool_or_none)
    }

    /// 读取为字典，类型不符的元素为 None
    pub fn get_dict_or_none_collection(&self) -> Vec<Option<RawDict>> {
        self.map(|item| item.get_dict_or_none().cloned())
    }

    /// 读取为列表，类型不符的元素为 None
    pub fn get_list_or_none_collection(&self) -> Vec<Option<RawList>> {
        self.map(|item| item.get_list_or_none().cloned())
    }

    // 转换

    /// 全部转换为字符串
    pub fn to_str_collection(&self) -> Vec<String> {
        self.map(ConfigValue::to_str)
    }

    /// 全部转换为整数
    pub fn to_int_collection(&self) -> ConfigResult<Vec<i64>> {
        self.items.iter().map(ConfigValue::to_int).collect()
    }

    /// 全部转换为浮点数
    pub fn to_float_collection(&self) -> ConfigResult<Vec<f64>> {
        self.items.iter().map(ConfigValue::to_float).collect()
    }

    /// 全部按真值规则转换为布尔值
    pub fn to_bool_collection(&self) -> Vec<bool> {
        self.map(ConfigValue::to_bool)
    }

    /// 全部转换为字典
    pub fn to_dict_collection(&self) -> ConfigResult<Vec<RawDict>> {
        self.items.iter().map(ConfigValue::to_dict).collect()
    }

    /// 全部转换为列表
    pub fn to_list_collection(&self) -> ConfigResult<Vec<RawList>> {
        self.items.iter().map(ConfigValue::to_list).collect()
    }
}

impl Index<usize> for ConfigValueCollection {
    type Output = ConfigValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for ConfigValueCollection {
    type Item = ConfigValue;
    type IntoIter = std::vec::IntoIter<ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigValueCollection {
    type Item = &'a ConfigValue;
    type IntoIter = std::slice::Iter<'a, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ConfigValue> for ConfigValueCollection {
    fn from_iter<I: IntoIterator<Item = ConfigValue>>(iter: I) -> Self {
        Self::from_config_values(iter)
    }
}
