//! 选项公共状态

use config_abstractions::{ConfigValue, OptionContext, OptionPath, RawValue, ValueClass, ValueType};
use config_tree_common::ConfigResult;
use std::fmt;
use std::sync::Arc;

type PrepareFn = dyn Fn(RawValue) -> ConfigResult<RawValue> + Send + Sync;

/// 选项公共状态
///
/// 保存上下文、当前值、允许的原始类型和值类，并实现统一的赋值流程：
/// 预处理、按允许类型校验、包装为配置值。
#[derive(Clone)]
pub struct OptionCore {
    context: OptionContext,
    value: Option<ConfigValue>,
    allowed_type: ValueType,
    value_class: ValueClass,
    prepare: Option<Arc<PrepareFn>>,
}

impl OptionCore {
    /// 创建新的公共状态
    pub fn new(context: OptionContext, allowed_type: ValueType) -> Self {
        Self {
            context,
            value: None,
            allowed_type,
            value_class: ValueClass::any(),
            prepare: None,
        }
    }

    /// 选项上下文
    pub const fn context(&self) -> &OptionContext {
        &self.context
    }

    /// 选项键
    pub fn key(&self) -> &str {
        self.context.key()
    }

    /// 选项路径
    pub const fn path(&self) -> &OptionPath {
        self.context.path()
    }

    /// 当前值
    pub const fn value(&self) -> Option<&ConfigValue> {
        self.value.as_ref()
    }

    /// 允许的原始类型
    pub const fn allowed_type(&self) -> &ValueType {
        &self.allowed_type
    }

    /// 设置允许的原始类型
    pub fn set_allowed_type(&mut self, allowed_type: ValueType) {
        self.allowed_type = allowed_type;
    }

    /// 值类
    pub const fn value_class(&self) -> &ValueClass {
        &self.value_class
    }

    /// 设置值类
    pub fn set_value_class(&mut self, value_class: ValueClass) {
        self.value_class = value_class;
    }

    /// 设置预处理函数
    pub fn set_prepare<F>(&mut self, prepare: F)
    where
        F: Fn(RawValue) -> ConfigResult<RawValue> + Send + Sync + 'static,
    {
        self.prepare = Some(Arc::new(prepare));
    }

    /// 更换上下文
    pub fn attach(&mut self, context: OptionContext) {
        self.context = context;
    }

    /// 赋值
    ///
    /// 空值返回 `Ok(None)` 且不改变当前值；否则返回预处理后的原始值。
    /// 已包装的配置值原样保存，其他原始值用选项的值类包装。
    pub fn store(&mut self, raw: RawValue) -> ConfigResult<Option<RawValue>> {
        if raw.is_null() {
            return Ok(None);
        }

        let raw = match &self.prepare {
            Some(prepare) => prepare(raw)?,
            None => raw,
        };

        let path = self.context.path().to_string();
        ConfigValue::validate_value_type(&raw, &self.allowed_type)
            .map_err(|e| e.at_path(path.as_str()))?;

        let value = match &raw {
            RawValue::Value(value) => (**value).clone(),
            other => ConfigValue::with_class(other.clone(), self.value_class.clone())
                .map_err(|e| e.at_path(path.as_str()))?,
        };
        self.value = Some(value);

        Ok(Some(raw))
    }
}

impl fmt::Debug for OptionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionCore")
            .field("key", &self.context.key())
            .field("path", &self.context.path().to_string())
            .field("value", &self.value)
            .field("allowed_type", &self.allowed_type.to_string())
            .finish_non_exhaustive()
    }
}

/// 将 [`ConfigOption`](config_abstractions::ConfigOption) 委托给内部字段实现
///
/// 用于以新类型包装现有选项来定义具名选项，向下转型得到的是外层类型。
///
/// ```ignore
/// #[derive(Debug)]
/// pub struct DemoListConfigOption(ValueConfigOption);
///
/// delegate_config_option!(DemoListConfigOption, 0);
/// ```
#[macro_export]
macro_rules! delegate_config_option {
    ($type:ty, $field:tt) => {
        impl $crate::__private::ConfigOption for $type {
            fn key(&self) -> &str {
                $crate::__private::ConfigOption::key(&self.$field)
            }

            fn path(&self) -> &$crate::__private::OptionPath {
                $crate::__private::ConfigOption::path(&self.$field)
            }

            fn value(&self) -> ::std::option::Option<&$crate::__private::ConfigValue> {
                $crate::__private::ConfigOption::value(&self.$field)
            }

            fn set_value(
                &mut self,
                raw: $crate::__private::RawValue,
            ) -> $crate::__private::ConfigResult<()> {
                $crate::__private::ConfigOption::set_value(&mut self.$field, raw)
            }

            fn attach(&mut self, context: $crate::__private::OptionContext) {
                $crate::__private::ConfigOption::attach(&mut self.$field, context);
            }

            fn dump(&self) -> $crate::__private::RawValue {
                $crate::__private::ConfigOption::dump(&self.$field)
            }

            fn options(&self) -> ::std::option::Option<&$crate::__private::OptionMap> {
                $crate::__private::ConfigOption::options(&self.$field)
            }

            fn children(&self) -> ::std::vec::Vec<&dyn $crate::__private::ConfigOption> {
                $crate::__private::ConfigOption::children(&self.$field)
            }

            fn child(&self, key: &str) -> ::std::option::Option<&dyn $crate::__private::ConfigOption> {
                $crate::__private::ConfigOption::child(&self.$field, key)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}
