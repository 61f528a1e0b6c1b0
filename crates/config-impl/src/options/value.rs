//! 单值选项

use crate::options::OptionCore;
use config_abstractions::{
    ConfigOption, ConfigValue, OptionContext, OptionPath, OptionType, RawValue, ValueClass,
    ValueType,
};
use config_tree_common::ConfigResult;
use std::any::Any;

/// 单值选项
///
/// 持有一个配置值，允许的原始类型和值类可配置。
/// 嵌套选项允许未定义的键时，也用它包装这些键。
#[derive(Debug, Clone)]
pub struct ValueConfigOption {
    core: OptionCore,
}

impl ValueConfigOption {
    /// 创建接受任意类型的单值选项
    pub fn new(context: OptionContext) -> Self {
        Self::with_allowed_type(context, ValueType::Any)
    }

    /// 创建限定原始类型的单值选项
    pub fn with_allowed_type(context: OptionContext, allowed_type: ValueType) -> Self {
        Self {
            core: OptionCore::new(context, allowed_type),
        }
    }

    /// 指定值类
    #[must_use]
    pub fn with_value_class(mut self, value_class: ValueClass) -> Self {
        self.core.set_value_class(value_class);
        self
    }

    /// 指定预处理函数，在校验之前改写原始值
    #[must_use]
    pub fn with_prepare<F>(mut self, prepare: F) -> Self
    where
        F: Fn(RawValue) -> ConfigResult<RawValue> + Send + Sync + 'static,
    {
        self.core.set_prepare(prepare);
        self
    }

    /// 创建并赋值
    pub fn with_value(mut self, raw: impl Into<RawValue>) -> ConfigResult<Self> {
        self.set_value(raw.into())?;
        Ok(self)
    }

    /// 允许的原始类型
    pub const fn allowed_type(&self) -> &ValueType {
        self.core.allowed_type()
    }
}

impl ConfigOption for ValueConfigOption {
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
        self.core.store(raw).map(|_| ())
    }

    fn attach(&mut self, context: OptionContext) {
        self.core.attach(context);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl OptionType for ValueConfigOption {
    fn create(context: OptionContext) -> Self {
        Self::new(context)
    }
}
