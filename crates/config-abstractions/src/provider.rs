//! 选项提供者抽象接口

use crate::option::{ConfigOption, DictConfig, OptionContext};
use config_tree_common::{option_name_of, ConfigResult, TypeInfo};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// 选项工厂，根据上下文创建一个尚未赋值的选项
pub type OptionFactory = Arc<dyn Fn(OptionContext) -> Box<dyn ConfigOption> + Send + Sync>;

/// 配置预处理钩子，在创建子选项前改写配置字典
pub type ConfigResolver = Arc<dyn Fn(DictConfig) -> ConfigResult<DictConfig> + Send + Sync>;

/// 选项描述符
///
/// 相当于选项的"类"：名称、类型名、工厂以及配置预处理钩子。
#[derive(Clone)]
pub struct OptionDescriptor {
    name: String,
    type_name: &'static str,
    factory: OptionFactory,
    resolver: ConfigResolver,
}

impl OptionDescriptor {
    /// 创建新的描述符
    pub fn new<F>(name: impl Into<String>, type_name: &'static str, factory: F) -> Self
    where
        F: Fn(OptionContext) -> Box<dyn ConfigOption> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            type_name,
            factory: Arc::new(factory),
            resolver: Arc::new(keep_config),
        }
    }

    /// 从选项类型生成描述符
    pub fn of<T: OptionType>() -> Self {
        Self {
            name: T::option_name(),
            type_name: std::any::type_name::<T>(),
            factory: Arc::new(|context| -> Box<dyn ConfigOption> { Box::new(T::create(context)) }),
            resolver: Arc::new(T::resolve_config),
        }
    }

    /// 设置配置预处理钩子
    #[must_use]
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(DictConfig) -> ConfigResult<DictConfig> + Send + Sync + 'static,
    {
        self.resolver = Arc::new(resolver);
        self
    }

    /// 使用其他名称注册同一个选项类型
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 选项名称，即配置字典中的键
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 选项类型名
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 创建尚未赋值的选项
    pub fn create(&self, context: OptionContext) -> Box<dyn ConfigOption> {
        (self.factory)(context)
    }

    /// 预处理配置字典
    pub fn resolve_config(&self, config: DictConfig) -> ConfigResult<DictConfig> {
        (self.resolver)(config)
    }
}

fn keep_config(config: DictConfig) -> ConfigResult<DictConfig> {
    Ok(config)
}

impl fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// 具名选项类型
///
/// 为具体选项类型提供默认名称、构造方式和配置预处理钩子。
pub trait OptionType: ConfigOption + Sized {
    /// 选项名称，默认取类型短名去掉 `ConfigOption` 后缀再转为蛇形
    fn option_name() -> String {
        option_name_of::<Self>()
    }

    /// 在给定上下文中创建选项
    fn create(context: OptionContext) -> Self;

    /// 预处理配置字典
    fn resolve_config(config: DictConfig) -> ConfigResult<DictConfig> {
        Ok(config)
    }

    /// 描述符
    fn descriptor() -> OptionDescriptor {
        OptionDescriptor::of::<Self>()
    }

    /// 类型信息
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
    }
}

/// 选项提供者 trait
///
/// 定义某一层级允许出现的选项集合。
pub trait OptionsProvider: fmt::Debug + Send + Sync {
    /// 提供者名称
    fn name(&self) -> &str;

    /// 提供的选项描述符
    fn options(&self) -> Vec<OptionDescriptor>;

    /// 名称到描述符的映射
    fn options_registry(&self) -> BTreeMap<String, OptionDescriptor> {
        self.options()
            .into_iter()
            .map(|descriptor| (descriptor.name().to_string(), descriptor))
            .collect()
    }
}

/// 一组选项提供者，子节点共享父节点的同一组
#[derive(Clone, Default)]
pub struct ProviderSet {
    providers: Arc<Vec<Arc<dyn OptionsProvider>>>,
}

impl ProviderSet {
    /// 创建提供者集合
    pub fn new(providers: Vec<Arc<dyn OptionsProvider>>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 提供者数量
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// 迭代提供者
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn OptionsProvider>> {
        self.providers.iter()
    }

    /// 按顺序拼接所有提供者的选项
    pub fn allowed_options(&self) -> Vec<OptionDescriptor> {
        self.providers
            .iter()
            .flat_map(|provider| provider.options())
            .collect()
    }

    /// 名称到描述符的映射，同名时后出现的覆盖先出现的
    pub fn allowed_options_registry(&self) -> BTreeMap<String, OptionDescriptor> {
        self.allowed_options()
            .into_iter()
            .map(|descriptor| (descriptor.name().to_string(), descriptor))
            .collect()
    }

    /// 是否为同一组提供者
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.providers, &other.providers)
    }
}

impl fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|provider| provider.name()))
            .finish()
    }
}

impl FromIterator<Arc<dyn OptionsProvider>> for ProviderSet {
    fn from_iter<I: IntoIterator<Item = Arc<dyn OptionsProvider>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
