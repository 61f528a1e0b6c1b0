//! 名称选项

use crate::delegate_config_option;
use crate::options::ValueConfigOption;
use config_abstractions::{
    ConfigEntry, ConfigValue, DictConfig, OptionContext, OptionType, RawValue, ValueClass,
    ValueType,
};
use config_tree_common::ConfigResult;

/// 名称选项（`name`）
///
/// 接受字符串、回调或回调渲染值。配置中的原始回调会被转换为回调渲染值，
/// 在所属的嵌套选项创建子选项前以该嵌套选项为参数求值。
#[derive(Debug)]
pub struct NameConfigOption(ValueConfigOption);

delegate_config_option!(NameConfigOption, 0);

impl NameConfigOption {
    /// 允许的原始类型
    pub fn allowed_type() -> ValueType {
        ValueType::union([
            ValueType::Str,
            ValueType::Callable,
            ValueType::wrapped(ValueClass::CALLBACK_RENDER),
        ])
    }
}

impl OptionType for NameConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ValueConfigOption::with_allowed_type(
            context,
            Self::allowed_type(),
        ))
    }

    fn resolve_config(mut config: DictConfig) -> ConfigResult<DictConfig> {
        let key = Self::option_name();

        if let Some(ConfigEntry::Raw(raw)) = config.get_mut(&key) {
            if let RawValue::Callable(callback) = raw {
                *raw = RawValue::from(ConfigValue::callback_render(callback.clone()));
            }
        }

        Ok(config)
    }
}
