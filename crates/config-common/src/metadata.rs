//! 元数据定义
//!
//! 提供配置选项类型的命名信息

use std::any::TypeId;

/// 配置选项类型名称的默认后缀
pub const CONFIG_OPTION_SUFFIX: &str = "ConfigOption";

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 简短类型名称（不含模块路径和泛型参数）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: short_type_name(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取简短的类型名称
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 获取去掉后缀并转为 snake_case 的名称
    ///
    /// `DemoListConfigOption` 配合后缀 `ConfigOption` 得到 `demo_list`。
    pub fn snake_name(&self, suffix: Option<&str>) -> String {
        let mut name = self.name.as_str();
        if let Some(suffix) = suffix {
            if let Some(stripped) = name.strip_suffix(suffix) {
                if !stripped.is_empty() {
                    name = stripped;
                }
            }
        }
        to_snake_case(name)
    }
}

/// 从完整类型路径中取出简短名称
pub fn short_type_name(full_name: &str) -> &str {
    let without_generics = full_name.split('<').next().unwrap_or(full_name);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// 配置选项类型的默认选项名
pub fn option_name_of<T: 'static>() -> String {
    TypeInfo::of::<T>().snake_name(Some(CONFIG_OPTION_SUFFIX))
}

/// 将 CamelCase 转换为 snake_case
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut output = String::with_capacity(name.len() + 4);

    for (index, current) in chars.iter().enumerate() {
        if current.is_uppercase() {
            let previous = index.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(index + 1);
            let starts_word = match previous {
                None => false,
                Some(prev) if prev == '_' => false,
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                // 连续大写的缩写，在下一个小写字母前断开：HTTPServer -> http_server
                Some(_) => next.is_some_and(|n| n.is_lowercase()),
            };
            if starts_word {
                output.push('_');
            }
            output.extend(current.to_lowercase());
        } else {
            output.push(*current);
        }
    }

    output
}
