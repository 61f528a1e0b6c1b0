//! 配置值模型

pub mod collection;
pub mod config_value;
pub mod filter;
pub mod nested;
pub mod raw;
pub mod value_type;

pub use collection::ConfigValueCollection;
pub use config_value::{ConfigValue, ValueClass};
pub use filter::{ConfigValueFilter, TrimConfigValueFilter};
pub use nested::{NestedConfigValue, DEFAULT_PATH_SEPARATOR};
pub use raw::{Callback, RawDict, RawList, RawValue};
pub use value_type::ValueType;
