//! 配置选项抽象
//!
//! 配置树中的每个节点都是一个 [`ConfigOption`]。节点不持有父节点引用，
//! 而是记录自身的 [`OptionPath`] 和继承得到的 [`OptionContext`]，
//! 需要向上导航时由根节点按路径查找。

use crate::provider::ProviderSet;
use crate::value::{ConfigValue, RawValue};
use config_tree_common::ConfigResult;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// 子选项表（键为选项键）
pub type OptionMap = BTreeMap<String, Box<dyn ConfigOption>>;

/// 传给嵌套选项的配置字典
pub type DictConfig = BTreeMap<String, ConfigEntry>;

/// 配置字典中的条目
#[derive(Debug)]
pub enum ConfigEntry {
    /// 待解析的原始值
    Raw(RawValue),
    /// 已构建的选项，直接挂到当前节点下
    Option(Box<dyn ConfigOption>),
}

impl ConfigEntry {
    /// 获取原始值
    pub const fn as_raw(&self) -> Option<&RawValue> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Option(_) => None,
        }
    }
}

impl From<RawValue> for ConfigEntry {
    fn from(raw: RawValue) -> Self {
        Self::Raw(raw)
    }
}

impl From<Box<dyn ConfigOption>> for ConfigEntry {
    fn from(option: Box<dyn ConfigOption>) -> Self {
        Self::Option(option)
    }
}

/// 选项在配置树中的路径
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionPath {
    segments: Vec<String>,
}

impl OptionPath {
    /// 根路径
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// 从分隔字符串解析路径，空字符串为根路径
    pub fn parse(path: &str, separator: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path.split(separator).map(str::to_string).collect(),
        }
    }

    /// 子路径
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// 父路径，根路径没有父路径
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// 路径段
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// 是否为根路径
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// 选项上下文
///
/// 由父节点在创建子节点时生成，子节点据此得知自己的键、路径以及可用的选项提供者。
#[derive(Clone, Debug, Default)]
pub struct OptionContext {
    key: String,
    path: OptionPath,
    providers: ProviderSet,
}

impl OptionContext {
    /// 根节点上下文
    pub fn root(key: impl Into<String>, providers: ProviderSet) -> Self {
        Self {
            key: key.into(),
            path: OptionPath::root(),
            providers,
        }
    }

    /// 子节点上下文，继承当前的提供者
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        Self {
            key: key.to_string(),
            path: self.path.child(key),
            providers: self.providers.clone(),
        }
    }

    /// 替换提供者
    #[must_use]
    pub fn with_providers(mut self, providers: ProviderSet) -> Self {
        self.providers = providers;
        self
    }

    /// 选项键
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 选项路径
    pub const fn path(&self) -> &OptionPath {
        &self.path
    }

    /// 可用的选项提供者
    pub const fn providers(&self) -> &ProviderSet {
        &self.providers
    }
}

/// 配置选项
///
/// 配置树中的节点。单值选项只持有一个 [`ConfigValue`]，
/// 嵌套选项和列表选项额外持有子选项。
pub trait ConfigOption: Any + fmt::Debug + Send + Sync {
    /// 选项键
    fn key(&self) -> &str;

    /// 从根节点开始的路径
    fn path(&self) -> &OptionPath;

    /// 当前配置值
    fn value(&self) -> Option<&ConfigValue>;

    /// 设置原始值，空值不做任何处理
    fn set_value(&mut self, raw: RawValue) -> ConfigResult<()>;

    /// 挂到新的父节点下
    fn attach(&mut self, context: OptionContext);

    /// 导出为原始值
    fn dump(&self) -> RawValue {
        self.value()
            .map_or(RawValue::Null, ConfigValue::to_option_raw_value)
    }

    /// 子选项表，仅嵌套选项返回
    fn options(&self) -> Option<&OptionMap> {
        None
    }

    /// 直接子节点
    fn children(&self) -> Vec<&dyn ConfigOption> {
        self.options()
            .map(|options| options.values().map(|option| &**option).collect())
            .unwrap_or_default()
    }

    /// 按路径段查找直接子节点
    fn child(&self, key: &str) -> Option<&dyn ConfigOption> {
        self.get_option(key)
    }

    /// 按名称查找子选项
    fn get_option(&self, name: &str) -> Option<&dyn ConfigOption> {
        self.options()
            .and_then(|options| options.get(name))
            .map(|option| &**option)
    }

    /// 深度优先查找子选项
    fn get_option_recursive(&self, name: &str) -> Option<&dyn ConfigOption> {
        if let Some(option) = self.get_option(name) {
            return Some(option);
        }

        self.options()?
            .values()
            .find_map(|option| option.get_option_recursive(name))
    }

    /// 子选项的配置值，选项不存在或没有值时返回空值
    fn get_option_value(&self, name: &str) -> ConfigValue {
        self.get_option(name)
            .and_then(|option| option.value())
            .cloned()
            .unwrap_or_default()
    }

    /// 用于向下转型
    fn as_any(&self) -> &dyn Any;

    /// 用于可变向下转型
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<'a> dyn ConfigOption + 'a {
    /// 是否为指定类型
    pub fn is<T: ConfigOption>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// 向下转型
    pub fn downcast_ref<T: ConfigOption>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// 可变向下转型
    pub fn downcast_mut<T: ConfigOption>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
