//! 配置选项节点

pub mod base;
pub mod list;
pub mod name;
pub mod nested;
pub mod value;

pub use base::OptionCore;
pub use list::{ChildrenConfigOption, ListConfigOption};
pub use name::NameConfigOption;
pub use nested::NestedConfigOption;
pub use value::ValueConfigOption;
