//! 配置管理器实现

use crate::delegate_config_option;
use crate::options::NestedConfigOption;
use crate::sources::SourceFormat;
use config_abstractions::{
    ConfigOption, OptionContext, OptionDescriptor, OptionPath, OptionsProvider, ProviderSet,
    RawValue, DEFAULT_PATH_SEPARATOR,
};
use config_tree_common::ConfigResult;
use std::sync::Arc;
use tracing::info;

/// 默认根键
pub const DEFAULT_MANAGER_KEY: &str = "config_manager";

/// 配置管理器
///
/// 配置树的根节点，持有根层级的选项提供者，并负责按路径导航。
#[derive(Debug)]
pub struct ConfigManager {
    root: NestedConfigOption,
}

delegate_config_option!(ConfigManager, root);

impl ConfigManager {
    /// 创建构建器
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// 根节点
    pub const fn root(&self) -> &NestedConfigOption {
        &self.root
    }

    /// 可变根节点
    pub fn root_mut(&mut self) -> &mut NestedConfigOption {
        &mut self.root
    }

    /// 根层级的选项提供者
    pub fn providers(&self) -> &ProviderSet {
        self.root.providers()
    }

    /// 赋值
    pub fn set_value(&mut self, raw: impl Into<RawValue>) -> ConfigResult<()> {
        ConfigOption::set_value(&mut self.root, raw.into())
    }

    /// 按选项类型实例化根层级的子选项
    pub fn set_option_types(&mut self, types: &[OptionDescriptor]) -> ConfigResult<Vec<String>> {
        self.root.set_option_types(types)
    }

    /// 按名称获取根层级的子选项
    pub fn get_option(&self, name: &str) -> Option<&dyn ConfigOption> {
        self.root.get_option(name)
    }

    /// 深度优先查找子选项
    pub fn get_option_recursive(&self, name: &str) -> Option<&dyn ConfigOption> {
        self.root.get_option_recursive(name)
    }

    /// 子选项的配置值
    pub fn get_option_value(&self, name: &str) -> config_abstractions::ConfigValue {
        self.root.get_option_value(name)
    }

    /// 按点分路径获取选项，空路径返回根节点
    pub fn get_option_at(&self, path: &str) -> Option<&dyn ConfigOption> {
        self.get_option_at_path(&OptionPath::parse(path, DEFAULT_PATH_SEPARATOR))
    }

    /// 按路径获取选项
    pub fn get_option_at_path(&self, path: &OptionPath) -> Option<&dyn ConfigOption> {
        path.segments()
            .iter()
            .try_fold(&self.root as &dyn ConfigOption, |current, segment| {
                current.child(segment)
            })
    }

    /// 获取路径所指选项的父节点，根节点没有父节点
    pub fn parent_of(&self, path: &str) -> Option<&dyn ConfigOption> {
        let parent = OptionPath::parse(path, DEFAULT_PATH_SEPARATOR).parent()?;
        self.get_option_at_path(&parent)
    }

    /// 导出为原始值
    pub fn dump(&self) -> RawValue {
        self.root.dump()
    }

    /// 导出为格式化的 JSON 文本
    pub fn dump_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.dump())?)
    }

    /// 从 JSON 文本加载
    pub fn load_json_str(&mut self, content: &str) -> ConfigResult<()> {
        self.load_str(SourceFormat::Json, content)
    }

    /// 从 YAML 文本加载
    pub fn load_yaml_str(&mut self, content: &str) -> ConfigResult<()> {
        self.load_str(SourceFormat::Yaml, content)
    }

    /// 从 TOML 文本加载
    pub fn load_toml_str(&mut self, content: &str) -> ConfigResult<()> {
        self.load_str(SourceFormat::Toml, content)
    }

    /// 按指定格式加载文本
    pub fn load_str(&mut self, format: SourceFormat, content: &str) -> ConfigResult<()> {
        let raw = format.parse(content)?;
        self.set_value(raw)?;
        info!("{} 配置已加载到 {}", format.name(), self.root.key());
        Ok(())
    }
}

/// 配置管理器构建器
#[derive(Debug)]
pub struct ConfigManagerBuilder {
    key: String,
    providers: Vec<Arc<dyn OptionsProvider>>,
    allow_undefined_keys: bool,
}

impl Default for ConfigManagerBuilder {
    fn default() -> Self {
        Self {
            key: DEFAULT_MANAGER_KEY.to_string(),
            providers: Vec::new(),
            allow_undefined_keys: false,
        }
    }
}

impl ConfigManagerBuilder {
    /// 根键
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// 添加选项提供者
    #[must_use]
    pub fn provider<P: OptionsProvider + 'static>(self, provider: P) -> Self {
        self.shared_provider(Arc::new(provider))
    }

    /// 添加共享的选项提供者
    #[must_use]
    pub fn shared_provider(mut self, provider: Arc<dyn OptionsProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// 根层级是否允许未定义的键
    #[must_use]
    pub const fn allow_undefined_keys(mut self, allow: bool) -> Self {
        self.allow_undefined_keys = allow;
        self
    }

    /// 构建配置管理器
    pub fn build(self) -> ConfigManager {
        info!(
            "创建配置管理器: {}，选项提供者: {}",
            self.key,
            self.providers
                .iter()
                .map(|provider| provider.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let context = OptionContext::root(self.key, ProviderSet::new(self.providers));
        ConfigManager {
            root: NestedConfigOption::new(context).allow_undefined_keys(self.allow_undefined_keys),
        }
    }
}
