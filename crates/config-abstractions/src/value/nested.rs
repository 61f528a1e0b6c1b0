//! 嵌套配置值
//!
//! 将字典和列表递归包装成可按路径访问的树。

use crate::value::{ConfigValue, RawDict, RawList, RawValue};
use config_tree_common::{ConfigError, ConfigResult};
use std::collections::BTreeMap;

/// 默认路径分隔符
pub const DEFAULT_PATH_SEPARATOR: &str = ".";

/// 嵌套配置值
#[derive(Clone, Debug, PartialEq)]
pub enum NestedConfigValue {
    /// 字典节点
    Dict(BTreeMap<String, NestedConfigValue>),
    /// 列表节点
    List(Vec<NestedConfigValue>),
    /// 叶子值
    Leaf(ConfigValue),
}

impl NestedConfigValue {
    /// 递归包装原始值
    pub fn new(raw: impl Into<RawValue>) -> Self {
        Self::wrap(raw.into())
    }

    /// 递归包装原始值：字典和列表成为节点，其余成为叶子
    pub fn wrap(raw: RawValue) -> Self {
        match raw {
            RawValue::Dict(entries) => Self::Dict(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::wrap(value)))
                    .collect(),
            ),
            RawValue::List(items) => Self::List(items.into_iter().map(Self::wrap).collect()),
            other => Self::Leaf(ConfigValue::new(other)),
        }
    }

    /// 是否为字典节点
    pub const fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }

    /// 是否为列表节点
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// 叶子值
    pub const fn as_leaf(&self) -> Option<&ConfigValue> {
        match self {
            Self::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// 按键读取子项
    ///
    /// 字典按键访问；列表按字符串形式的整数下标访问，负数从末尾计数。
    pub fn get_config_item(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Dict(entries) => entries.get(key),
            Self::List(items) => resolve_index(key, items.len()).and_then(|index| items.get(index)),
            Self::Leaf(_) => None,
        }
    }

    /// 按路径查找，如 `"first.second.0.third"`
    ///
    /// 空路径返回自身，任一段未命中返回 `None`。
    pub fn search(&self, path: &str, separator: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }

        path.split(separator)
            .try_fold(self, |current, part| current.get_config_item(part))
    }

    /// 按路径查找并转换为配置值，未命中时使用默认值
    pub fn search_value(&self, path: &str, default: impl Into<RawValue>) -> ConfigValue {
        match self.search(path, DEFAULT_PATH_SEPARATOR) {
            Some(Self::Leaf(value)) => value.clone(),
            Some(node) => ConfigValue::new(node.to_raw()),
            None => ConfigValue::new(default),
        }
    }

    /// 按路径写入值
    ///
    /// 根节点必须是字典；中间节点缺失时按 `create_missing` 决定创建或报错。
    pub fn set_by_path(
        &mut self,
        path: &str,
        value: impl Into<RawValue>,
        separator: &str,
        create_missing: bool,
    ) -> ConfigResult<()> {
        if path.is_empty() {
            return Err(ConfigError::invalid_path(path, "路径不能为空"));
        }

        let Self::Dict(root) = self else {
            return Err(ConfigError::invalid_path(path, "只能在字典节点上按路径写入"));
        };

        let parts: Vec<&str> = path.split(separator).collect();
        let (last, parents) = parts
            .split_last()
            .ok_or_else(|| ConfigError::invalid_path(path, "路径不能为空"))?;

        let mut current = root;
        for (index, part) in parents.iter().enumerate() {
            let walked = parts[..=index].join(separator);
            if !current.contains_key(*part) {
                if !create_missing {
                    return Err(ConfigError::invalid_path(walked, "路径不存在"));
                }
                current.insert((*part).to_string(), Self::Dict(BTreeMap::new()));
            }

            current = match current.get_mut(*part) {
                Some(Self::Dict(next)) => next,
                _ => return Err(ConfigError::invalid_path(walked, "中间节点不是字典")),
            };
        }

        current.insert((*last).to_string(), Self::wrap(value.into()));
        Ok(())
    }

    /// 递归合并字典数据：两侧均为字典时合并，否则替换
    pub fn update_nested(&mut self, data: RawDict) -> ConfigResult<()> {
        match self {
            Self::Dict(target) => {
                Self::update_recursive(target, data);
                Ok(())
            }
            _ => Err(ConfigError::invalid_path("", "只能更新字典节点")),
        }
    }

    fn update_recursive(target: &mut BTreeMap<String, Self>, source: RawDict) {
        for (key, value) in source {
            match value {
                RawValue::Dict(entries) => {
                    if let Some(Self::Dict(existing)) = target.get_mut(&key) {
                        Self::update_recursive(existing, entries);
                        continue;
                    }
                    target.insert(key, Self::wrap(RawValue::Dict(entries)));
                }
                other => {
                    target.insert(key, Self::wrap(other));
                }
            }
        }
    }

    /// 还原为原始值
    pub fn to_raw(&self) -> RawValue {
        match self {
            Self::Dict(_) => RawValue::Dict(self.to_dict()),
            Self::List(_) => RawValue::List(self.to_list()),
            Self::Leaf(value) => value.nested_raw().clone(),
        }
    }

    /// 还原为原始字典，非字典节点返回空字典
    pub fn to_dict(&self) -> RawDict {
        match self {
            Self::Dict(entries) => entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_raw()))
                .collect(),
            _ => RawDict::new(),
        }
    }

    /// 还原为原始列表，非列表节点返回空列表
    pub fn to_list(&self) -> RawList {
        match self {
            Self::List(items) => items.iter().map(Self::to_raw).collect(),
            _ => RawList::new(),
        }
    }
}

impl From<RawValue> for NestedConfigValue {
    fn from(raw: RawValue) -> Self {
        Self::wrap(raw)
    }
}

fn resolve_index(key: &str, len: usize) -> Option<usize> {
    // 只接受数字或负号加数字
    if key.starts_with('+') {
        return None;
    }
    let index: i64 = key.parse().ok()?;
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}
