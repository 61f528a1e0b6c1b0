//! # Configuration Tree Implementation
//!
//! 配置树的具体实现，提供各类选项节点、选项提供者和配置管理器。
//!
//! ## 主要组件
//!
//! - [`ConfigManager`] - 配置树根节点
//! - [`NestedConfigOption`] - 字典值节点
//! - [`ListConfigOption`] / [`ChildrenConfigOption`] - 列表值节点
//! - [`ValueConfigOption`] / [`NameConfigOption`] - 单值节点
//! - [`StaticOptionsProvider`] - 静态选项提供者
//! - [`SourceFormat`] - JSON / YAML / TOML 文本解析

pub mod manager;
pub mod options;
pub mod providers;
pub mod sources;

pub use manager::*;
pub use options::*;
pub use providers::*;
pub use sources::*;

#[doc(hidden)]
pub mod __private {
    pub use config_abstractions::{
        ConfigOption, ConfigValue, OptionContext, OptionMap, OptionPath, RawValue,
    };
    pub use config_tree_common::ConfigResult;
}
