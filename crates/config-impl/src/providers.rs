//! 选项提供者实现

use config_abstractions::{OptionDescriptor, OptionType, OptionsProvider};
use tracing::debug;

/// 静态选项提供者
///
/// 以构建器方式登记一组选项描述符。
#[derive(Debug, Clone, Default)]
pub struct StaticOptionsProvider {
    name: String,
    options: Vec<OptionDescriptor>,
}

impl StaticOptionsProvider {
    /// 创建新的静态提供者
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// 登记选项类型
    #[must_use]
    pub fn with_option<T: OptionType>(self) -> Self {
        self.with_descriptor(T::descriptor())
    }

    /// 登记选项描述符
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: OptionDescriptor) -> Self {
        debug!("提供者 {} 登记选项: {}", self.name, descriptor.name());
        self.options.push(descriptor);
        self
    }

    /// 批量登记选项描述符
    #[must_use]
    pub fn with_descriptors<I: IntoIterator<Item = OptionDescriptor>>(self, descriptors: I) -> Self {
        descriptors
            .into_iter()
            .fold(self, Self::with_descriptor)
    }
}

impl OptionsProvider for StaticOptionsProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        self.options.clone()
    }
}
