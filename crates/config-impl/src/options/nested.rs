//! 嵌套选项
//!
//! 字典值节点。赋值时根据当前层级可用的选项描述符，
//! 把字典中的每个键解析为对应的子选项。

use crate::options::{OptionCore, ValueConfigOption};
use config_abstractions::{
    ConfigEntry, ConfigOption, ConfigValue, DictConfig, OptionContext, OptionDescriptor,
    OptionMap, OptionPath, OptionType, ProviderSet, RawDict, RawValue, ValueType,
};
use config_tree_common::{ConfigError, ConfigResult};
use std::any::Any;
use std::collections::BTreeMap;
use tracing::debug;

/// 嵌套选项
#[derive(Debug)]
pub struct NestedConfigOption {
    core: OptionCore,
    options: OptionMap,
    allow_undefined_keys: bool,
    providers: Option<ProviderSet>,
}

impl NestedConfigOption {
    /// 创建嵌套选项，原始值必须是字典
    pub fn new(context: OptionContext) -> Self {
        Self {
            core: OptionCore::new(context, ValueType::dict()),
            options: OptionMap::new(),
            allow_undefined_keys: false,
            providers: None,
        }
    }

    /// 是否允许未定义的键
    #[must_use]
    pub const fn allow_undefined_keys(mut self, allow: bool) -> Self {
        self.allow_undefined_keys = allow;
        self
    }

    /// 指定本层级的选项提供者，覆盖继承得到的提供者
    #[must_use]
    pub fn with_providers(mut self, providers: ProviderSet) -> Self {
        self.providers = Some(providers);
        self
    }

    /// 放宽原始值的允许类型
    ///
    /// 非字典的值只会被保存，不会产生子选项。
    #[must_use]
    pub fn with_allowed_type(mut self, allowed_type: ValueType) -> Self {
        self.core.set_allowed_type(allowed_type);
        self
    }

    /// 是否允许未定义的键
    pub const fn allows_undefined_keys(&self) -> bool {
        self.allow_undefined_keys
    }

    /// 本层级生效的选项提供者
    pub fn providers(&self) -> &ProviderSet {
        self.providers
            .as_ref()
            .unwrap_or_else(|| self.core.context().providers())
    }

    /// 所有提供者的选项描述符
    pub fn allowed_options(&self) -> Vec<OptionDescriptor> {
        self.providers().allowed_options()
    }

    /// 名称到描述符的映射
    pub fn allowed_options_registry(&self) -> BTreeMap<String, OptionDescriptor> {
        self.providers().allowed_options_registry()
    }

    /// 可变地获取子选项
    pub fn get_option_mut(&mut self, name: &str) -> Option<&mut Box<dyn ConfigOption>> {
        self.options.get_mut(name)
    }

    /// 移除子选项
    pub fn remove_option(&mut self, name: &str) -> Option<Box<dyn ConfigOption>> {
        self.options.remove(name)
    }

    /// 按选项类型实例化子选项，不赋值
    pub fn set_option_types(&mut self, types: &[OptionDescriptor]) -> ConfigResult<Vec<String>> {
        let config: DictConfig = types
            .iter()
            .map(|descriptor| {
                let option = descriptor.create(self.child_context(descriptor.name()));
                (descriptor.name().to_string(), ConfigEntry::Option(option))
            })
            .collect();

        self.create_options(config)
    }

    /// 根据配置字典创建子选项
    ///
    /// 1. 运行所有已注册描述符的配置预处理钩子
    /// 2. 检查未注册的键，不允许时报错，允许时包装为单值选项
    /// 3. 以本选项为参数渲染回调值
    /// 4. 创建或挂接子选项，按键合并到已有子选项中
    ///
    /// 返回本次创建的子选项键。
    pub fn create_options(&mut self, config: DictConfig) -> ConfigResult<Vec<String>> {
        let registry = self.allowed_options_registry();

        let mut config = config;
        for descriptor in registry.values() {
            config = descriptor.resolve_config(config)?;
        }

        let unknown_keys: Vec<String> = config
            .keys()
            .filter(|key| !registry.contains_key(*key))
            .cloned()
            .collect();

        if !unknown_keys.is_empty() {
            if !self.allow_undefined_keys {
                return Err(ConfigError::invalid_option(
                    &unknown_keys,
                    self.owner_name(),
                    registry.keys(),
                ));
            }

            for key in unknown_keys {
                let Some(entry) = config.remove(&key) else {
                    continue;
                };
                let entry = match entry {
                    ConfigEntry::Raw(raw) => {
                        debug!("包装未定义的配置键: {}", self.core.path().child(&key));
                        let option =
                            ValueConfigOption::new(self.child_context(&key)).with_value(raw)?;
                        ConfigEntry::Option(Box::new(option))
                    }
                    prebuilt @ ConfigEntry::Option(_) => prebuilt,
                };
                config.insert(key, entry);
            }
        }

        for entry in config.values_mut() {
            let rendered = match entry {
                ConfigEntry::Raw(RawValue::Value(value)) if value.is_callback_render() => {
                    value.render(&*self)?
                }
                _ => continue,
            };
            *entry = ConfigEntry::Raw(rendered);
        }

        let mut created = Vec::with_capacity(config.len());
        for (name, entry) in config {
            let option = match entry {
                ConfigEntry::Option(mut option) => {
                    let key = option.key().to_string();
                    option.attach(self.child_context(&key));
                    option
                }
                ConfigEntry::Raw(raw) => {
                    let descriptor = registry
                        .get(&name)
                        .ok_or_else(|| ConfigError::KeyNotFound { key: name.clone() })?;
                    let mut option = descriptor.create(self.child_context(&name));
                    option.set_value(raw)?;
                    option
                }
            };

            let key = option.key().to_string();
            debug!("创建子选项: {} ({})", option.path(), key);
            self.options.insert(key.clone(), option);
            created.push(key);
        }

        Ok(created)
    }

    fn child_context(&self, key: &str) -> OptionContext {
        self.core
            .context()
            .child(key)
            .with_providers(self.providers().clone())
    }

    fn owner_name(&self) -> String {
        if self.core.path().is_root() {
            self.core.key().to_string()
        } else {
            self.core.path().to_string()
        }
    }
}

fn dict_config(raw: &RawValue) -> Option<DictConfig> {
    let entries: &RawDict = match raw {
        RawValue::Dict(entries) => entries,
        RawValue::Value(value) => value.nested_raw().as_dict()?,
        _ => return None,
    };

    Some(
        entries
            .iter()
            .map(|(key, value)| (key.clone(), ConfigEntry::Raw(value.clone())))
            .collect(),
    )
}

impl ConfigOption for NestedConfigOption {
    fn key(&self) -> &str {
        self.core.key()
    }

    fn path(&self) -> &OptionPath {
        self.core.path()
    }

    fn value(&self) -> Option<&ConfigValue> {
        self.core.value()
    }

    fn set_value(&mut self, raw: RawValue) -> ConfigResult<()> {
        let Some(raw) = self.core.store(raw)? else {
            return Ok(());
        };

        if let Some(config) = dict_config(&raw) {
            self.create_options(config)?;
        }
        Ok(())
    }

    fn attach(&mut self, context: OptionContext) {
        self.core.attach(context);

        let base = self.core.context().clone();
        let providers = self.providers().clone();
        for (key, option) in &mut self.options {
            option.attach(base.child(key).with_providers(providers.clone()));
        }
    }

    fn dump(&self) -> RawValue {
        RawValue::Dict(
            self.options
                .iter()
                .map(|(key, option)| (key.clone(), option.dump()))
                .collect(),
        )
    }

    fn options(&self) -> Option<&OptionMap> {
        Some(&self.options)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl OptionType for NestedConfigOption {
    fn create(context: OptionContext) -> Self {
        Self::new(context)
    }
}
