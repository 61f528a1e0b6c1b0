//! 配置值过滤器

use config_tree_common::to_snake_case;
use std::fmt;

/// 配置值过滤器 trait
///
/// 过滤器作用于字符串原始值，在值类构建配置值时依次执行。
pub trait ConfigValueFilter: fmt::Debug + Send + Sync {
    /// 过滤器名称
    fn name(&self) -> String {
        let type_name = config_tree_common::short_type_name(std::any::type_name::<Self>());
        to_snake_case(
            type_name
                .strip_suffix("ConfigValueFilter")
                .unwrap_or(type_name),
        )
    }

    /// 执行过滤
    fn apply_filter(&self, content: &str) -> String;
}

/// 去除首尾空白
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimConfigValueFilter;

impl ConfigValueFilter for TrimConfigValueFilter {
    fn apply_filter(&self, content: &str) -> String {
        content.trim().to_string()
    }
}
