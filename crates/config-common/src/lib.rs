//! # Config Tree Common
//!
//! 类型化配置树的公共错误类型和命名元数据。
//!
//! ## 核心组件
//!
//! - [`ConfigError`] - 配置错误类型
//! - [`ConfigResult`] - 结果类型别名
//! - [`TypeInfo`] - 选项类型命名信息

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
