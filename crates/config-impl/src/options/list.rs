//! 列表选项

use crate::delegate_config_option;
use crate::options::{NestedConfigOption, OptionCore};
use config_abstractions::{
    ConfigOption, ConfigValue, OptionContext, OptionDescriptor, OptionPath, OptionType, RawList,
    RawValue, ValueType,
};
use config_tree_common::ConfigResult;
use std::any::Any;
use tracing::debug;

/// 列表选项
///
/// 列表中的每个元素都成为一个子选项，键为元素下标。
/// 元素默认构建为嵌套选项，继承本层级的选项提供者。
#[derive(Debug)]
pub struct ListConfigOption {
    core: OptionCore,
    children: Vec<Box<dyn ConfigOption>>,
    item: Option<OptionDescriptor>,
}

impl ListConfigOption {
    /// 创建列表选项，原始值必须是字典列表
    pub fn new(context: OptionContext) -> Self {
        Self {
            core: OptionCore::new(context, ValueType::list_of(ValueType::dict())),
            children: Vec::new(),
            item: None,
        }
    }

    /// 指定元素的选项类型
    #[must_use]
    pub fn with_item_descriptor(mut self, descriptor: OptionDescriptor) -> Self {
        self.item = Some(descriptor);
        self
    }

    /// 放宽原始值的允许类型，元素类型由元素选项自行校验
    #[must_use]
    pub fn with_allowed_type(mut self, allowed_type: ValueType) -> Self {
        self.core.set_allowed_type(allowed_type);
        self
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// 是否没有元素
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 按下标获取元素
    pub fn get(&self, index: usize) -> Option<&dyn ConfigOption> {
        self.children.get(index).map(|child| &**child)
    }

    fn create_item(&self, context: OptionContext) -> Box<dyn ConfigOption> {
        match &self.item {
            Some(descriptor) => descriptor.create(context),
            None => Box::new(NestedConfigOption::new(context)),
        }
    }

    fn items_of(raw: &RawValue) -> RawList {
        match raw {
            RawValue::List(items) => items.clone(),
            RawValue::Value(value) => value.nested_raw().as_list().cloned().unwrap_or_default(),
            _ => RawList::new(),
        }
    }
}

impl ConfigOption for ListConfigOption {
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

        for item in Self::items_of(&raw) {
            let key = self.children.len().to_string();
            let mut child = self.create_item(self.core.context().child(&key));
            child.set_value(item)?;
            debug!("创建列表元素: {}", child.path());
            self.children.push(child);
        }
        Ok(())
    }

    fn attach(&mut self, context: OptionContext) {
        self.core.attach(context);

        let base = self.core.context().clone();
        for (index, child) in self.children.iter_mut().enumerate() {
            child.attach(base.child(&index.to_string()));
        }
    }

    fn dump(&self) -> RawValue {
        RawValue::List(self.children.iter().map(|child| child.dump()).collect())
    }

    fn children(&self) -> Vec<&dyn ConfigOption> {
        self.children.iter().map(|child| &**child).collect()
    }

    fn child(&self, key: &str) -> Option<&dyn ConfigOption> {
        key.parse::<usize>().ok().and_then(|index| self.get(index))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl OptionType for ListConfigOption {
    fn create(context: OptionContext) -> Self {
        Self::new(context)
    }
}

/// 子节点列表选项（`children`）
///
/// 元素均为嵌套选项，与所在层级使用同一组选项提供者。
#[derive(Debug)]
pub struct ChildrenConfigOption(ListConfigOption);

delegate_config_option!(ChildrenConfigOption, 0);

impl ChildrenConfigOption {
    /// 元素列表
    pub const fn list(&self) -> &ListConfigOption {
        &self.0
    }
}

impl OptionType for ChildrenConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ListConfigOption::new(context).with_item_descriptor(NestedConfigOption::descriptor()))
    }
}
