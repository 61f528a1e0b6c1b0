//! # Configuration Tree Abstractions
//!
//! 配置树抽象层，定义配置值模型和配置选项的核心接口。
//!
//! ## 核心类型
//!
//! - [`RawValue`] - 未类型化的原始配置数据
//! - [`ValueType`] - 允许的原始值类型及校验
//! - [`ConfigValue`] - 类型化配置值
//! - [`NestedConfigValue`] - 可按路径访问的嵌套配置值
//! - [`ConfigOption`] - 配置树节点接口
//! - [`OptionsProvider`] - 选项提供者接口

pub mod option;
pub mod provider;
pub mod value;

pub use option::*;
pub use provider::*;
pub use value::*;
