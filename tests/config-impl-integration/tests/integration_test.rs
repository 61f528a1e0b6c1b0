//! Centralized integration tests for config-impl crate
use config_abstractions::{
    Callback, ConfigEntry, ConfigOption, ConfigValue, DictConfig, NestedConfigValue,
    OptionContext, OptionDescriptor, OptionType, OptionsProvider, ProviderSet, RawValue,
    ValueClass, ValueType, DEFAULT_PATH_SEPARATOR,
};
use config_impl::{
    delegate_config_option, ChildrenConfigOption, ConfigManager, NameConfigOption,
    NestedConfigOption, StaticOptionsProvider, ValueConfigOption,
};
use config_tree_common::ConfigError;
use serde_json::json;
use std::sync::Arc;

const CUSTOM_TYPE: &str = "CustomTypeConfigValue";

/// 只接受字符串的自定义值类
fn custom_type() -> ValueClass {
    ValueClass::new(CUSTOM_TYPE, ValueType::Str)
}

/// 列表值
#[derive(Debug)]
struct DemoListConfigOption(ValueConfigOption);

delegate_config_option!(DemoListConfigOption, 0);

impl OptionType for DemoListConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ValueConfigOption::with_allowed_type(context, ValueType::list()))
    }
}

/// 自定义值类
#[derive(Debug)]
struct DemoCustomValueConfigOption(ValueConfigOption);

delegate_config_option!(DemoCustomValueConfigOption, 0);

impl OptionType for DemoCustomValueConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ValueConfigOption::with_allowed_type(
            context,
            ValueType::wrapped(CUSTOM_TYPE),
        ))
    }
}

/// 字典的字典
#[derive(Debug)]
struct DemoDictConfigOption(ValueConfigOption);

delegate_config_option!(DemoDictConfigOption, 0);

impl OptionType for DemoDictConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ValueConfigOption::with_allowed_type(
            context,
            ValueType::dict_of(ValueType::dict()),
        ))
    }
}

/// 字符串或字典
#[derive(Debug)]
struct DemoUnionConfigOption(ValueConfigOption);

delegate_config_option!(DemoUnionConfigOption, 0);

impl OptionType for DemoUnionConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(ValueConfigOption::with_allowed_type(
            context,
            ValueType::union([ValueType::Str, ValueType::dict()]),
        ))
    }
}

/// 接受任意键的嵌套选项
#[derive(Debug)]
struct DemoExtensibleConfigOption(NestedConfigOption);

delegate_config_option!(DemoExtensibleConfigOption, 0);

impl OptionType for DemoExtensibleConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(NestedConfigOption::new(context).allow_undefined_keys(true))
    }
}

/// 继承提供者的嵌套选项
#[derive(Debug)]
struct DemoNestedConfigOption(NestedConfigOption);

delegate_config_option!(DemoNestedConfigOption, 0);

impl OptionType for DemoNestedConfigOption {
    fn create(context: OptionContext) -> Self {
        Self(NestedConfigOption::new(context).with_allowed_type(ValueType::Any))
    }
}

/// 使用自己提供者的嵌套选项
#[derive(Debug)]
struct DemoScopedConfigOption(NestedConfigOption);

delegate_config_option!(DemoScopedConfigOption, 0);

impl OptionType for DemoScopedConfigOption {
    fn create(context: OptionContext) -> Self {
        let scoped: Arc<dyn OptionsProvider> =
            Arc::new(StaticOptionsProvider::new("scoped").with_option::<DemoUnionConfigOption>());
        Self(NestedConfigOption::new(context).with_providers(ProviderSet::new(vec![scoped])))
    }
}

fn demo_provider() -> StaticOptionsProvider {
    StaticOptionsProvider::new("demo")
        .with_option::<NameConfigOption>()
        .with_option::<ChildrenConfigOption>()
        .with_option::<DemoListConfigOption>()
        .with_option::<DemoCustomValueConfigOption>()
        .with_option::<DemoDictConfigOption>()
        .with_option::<DemoUnionConfigOption>()
        .with_option::<DemoExtensibleConfigOption>()
        .with_option::<DemoNestedConfigOption>()
        .with_option::<DemoScopedConfigOption>()
}

fn demo_manager() -> ConfigManager {
    ConfigManager::builder()
        .key("demo_config_manager")
        .provider(demo_provider())
        .build()
}

#[test]
fn test_setup() {
    let manager = demo_manager();

    assert_eq!(manager.key(), "demo_config_manager");
    assert!(manager.path().is_root());
    assert_eq!(manager.providers().len(), 1);
    assert!(manager.value().is_none());
    assert_eq!(manager.root().allowed_options().len(), 9);
}

#[test]
fn test_configure_callback() -> anyhow::Result<()> {
    let mut manager = demo_manager();
    let callback = Callback::new(|_| Ok(RawValue::from("yes")));

    manager.set_value(RawValue::dict([(
        "name",
        RawValue::from(ConfigValue::callback_render(callback)),
    )]))?;

    let name = manager.get_option("name").and_then(|option| option.value());
    assert!(name.is_some_and(ConfigValue::is_str));
    Ok(())
}

#[test]
fn test_configure_raw_callable_name_renders_against_owner() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.set_value(RawValue::from(json!({"demo_nested": {}})))?;
    manager.set_value(RawValue::dict([(
        "name",
        RawValue::callable(|owner| Ok(RawValue::from(format!("{}-name", owner.key())))),
    )]))?;

    assert_eq!(
        manager.get_option_value("name").get_str()?,
        "demo_config_manager-name"
    );
    assert!(manager.get_option("demo_nested").is_some());
    Ok(())
}

#[test]
fn test_configure_custom_value_type() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    assert!(matches!(
        ConfigValue::with_class(123, custom_type()),
        Err(ConfigError::NotAllowedValueType { .. })
    ));
    assert!(matches!(
        manager.set_value(RawValue::dict([("demo_custom_value", "yeah")])),
        Err(ConfigError::NotAllowedValueType { .. })
    ));

    manager.set_value(RawValue::dict([(
        "demo_custom_value",
        ConfigValue::with_class("yeah", custom_type())?,
    )]))?;

    let option = manager
        .get_option("demo_custom_value")
        .expect("custom value option");
    assert!(option.is::<DemoCustomValueConfigOption>());
    let value = option.value().expect("custom value");
    assert!(value.is_str());
    assert_eq!(value.get_str()?, "yeah");
    assert_eq!(value.class_name(), CUSTOM_TYPE);
    Ok(())
}

#[test]
fn test_configure_extensible() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.set_value(RawValue::from(json!({
        "demo_extensible": {
            "unexpected_option": "yes",
            "unexpected_dict": {
                "unexpected_option": "yay"
            }
        }
    })))?;

    let extensible = manager
        .get_option("demo_extensible")
        .expect("extensible option");
    assert!(extensible.value().is_some_and(ConfigValue::is_dict));
    assert_eq!(
        extensible.get_option_value("unexpected_option").get_str()?,
        "yes"
    );
    assert!(extensible
        .get_option("unexpected_dict")
        .is_some_and(|option| option.is::<ValueConfigOption>()));

    let error = manager
        .set_value(RawValue::dict([("lorem", "ipsum")]))
        .unwrap_err();
    assert!(matches!(error, ConfigError::InvalidOption { .. }));
    Ok(())
}

#[test]
fn test_configure_list_type() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    assert!(matches!(
        manager.set_value(RawValue::dict([("demo_list", 123)])),
        Err(ConfigError::NotAllowedValueType { .. })
    ));

    manager.set_value(RawValue::dict([("demo_list", RawValue::List(vec![]))]))?;

    assert!(manager.get_option_value("demo_list").is_list());
    Ok(())
}

#[test]
fn test_configure_name() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.set_value(RawValue::from(json!({"name": "yes", "children": []})))?;

    assert!(manager.value().is_some_and(ConfigValue::is_dict));
    assert_eq!(manager.key(), "demo_config_manager");
    assert!(!manager.root().options().map_or(true, |options| options.is_empty()));
    assert!(manager
        .get_option("name")
        .and_then(|option| option.value())
        .is_some_and(ConfigValue::is_str));
    assert_eq!(manager.get_option_value("name").get_str()?, "yes");
    assert!(manager.get_option_value("children").is_list());
    Ok(())
}

#[test]
fn test_configure_nested_dict_type() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.set_value(RawValue::dict([(
        "demo_nested",
        RawValue::dict([
            ("name", RawValue::from("FIRST_LEVEL_DICT")),
            (
                "demo_dict",
                RawValue::dict([(
                    "lorem",
                    RawValue::dict([
                        (
                            "info",
                            RawValue::from("As the demo_dict is typed, we should have sub dicts"),
                        ),
                        ("other", RawValue::from(123)),
                        (
                            "demo_custom_value",
                            RawValue::from(ConfigValue::with_class("yeah", custom_type())?),
                        ),
                    ]),
                )]),
            ),
        ]),
    )]))?;

    assert!(manager.value().expect("root value").get_dict().is_ok());

    let nested = manager.get_option("demo_nested").expect("nested option");
    assert!(nested.downcast_ref::<DemoNestedConfigOption>().is_some());

    let dict_option = manager
        .get_option_recursive("demo_dict")
        .expect("dict option created recursively");
    assert!(dict_option.is::<DemoDictConfigOption>());
    assert_eq!(dict_option.path().to_string(), "demo_nested.demo_dict");
    let lorem = dict_option.value().expect("dict value").get_dict()?;
    assert!(matches!(lorem.get("lorem"), Some(RawValue::Dict(_))));
    Ok(())
}

#[test]
fn test_configure_unexpected() {
    let mut manager = demo_manager();

    let error = manager
        .set_value(RawValue::dict([("unexpected_option", "yes")]))
        .unwrap_err();

    match error {
        ConfigError::InvalidOption {
            unknown,
            owner,
            allowed,
        } => {
            assert_eq!(unknown, "unexpected_option");
            assert_eq!(owner, "demo_config_manager");
            assert!(allowed.starts_with("children, demo_custom_value, demo_dict"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_configure_unexpected_type() {
    let mut manager = demo_manager();

    assert!(matches!(
        manager.set_value(RawValue::dict([("name", 123)])),
        Err(ConfigError::NotAllowedValueType { .. })
    ));
    assert!(matches!(
        manager.set_value(RawValue::dict([("name", RawValue::List(vec![]))])),
        Err(ConfigError::NotAllowedValueType { .. })
    ));
}

#[test]
fn test_configure_union_type() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    assert!(matches!(
        manager.set_value(RawValue::dict([("demo_union", 123)])),
        Err(ConfigError::NotAllowedValueType { .. })
    ));

    manager.set_value(RawValue::dict([("demo_union", "hey")]))?;
    assert!(manager.get_option_value("demo_union").is_str());

    manager.set_value(RawValue::dict([("demo_union", RawValue::Dict(Default::default()))]))?;
    assert!(manager.get_option_value("demo_union").is_dict());
    Ok(())
}

#[test]
fn test_scoped_providers_override_inherited() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.set_value(RawValue::from(json!({
        "demo_scoped": {"demo_union": "scoped"}
    })))?;
    assert_eq!(
        manager
            .get_option_at("demo_scoped.demo_union")
            .and_then(|option| option.value())
            .map(ConfigValue::to_str)
            .as_deref(),
        Some("scoped")
    );

    let error = manager
        .set_value(RawValue::from(json!({"demo_scoped": {"name": "inherited?"}})))
        .unwrap_err();
    match error {
        ConfigError::InvalidOption { owner, allowed, .. } => {
            assert_eq!(owner, "demo_scoped");
            assert_eq!(allowed, "demo_union");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_children_tree_navigation() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    manager.load_json_str(
        r#"{
            "name": "root",
            "children": [
                {"name": "first"},
                {"name": "second", "children": [{"name": "third", "demo_union": "deep"}]}
            ]
        }"#,
    )?;

    let third = manager
        .get_option_at("children.1.children.0")
        .expect("third child");
    assert_eq!(third.get_option_value("name").get_str()?, "third");
    assert_eq!(third.path().to_string(), "children.1.children.0");

    let parent = manager
        .parent_of(&third.path().to_string())
        .expect("parent list");
    assert_eq!(parent.key(), "children");
    assert_eq!(parent.children().len(), 1);

    assert!(manager.get_option_recursive("demo_union").is_none());
    Ok(())
}

#[test]
fn test_set_option_types_instantiates_empty_options() -> anyhow::Result<()> {
    let mut manager = demo_manager();

    let created = manager.set_option_types(&[
        NameConfigOption::descriptor(),
        DemoNestedConfigOption::descriptor(),
    ])?;

    assert_eq!(created, vec!["demo_nested".to_string(), "name".to_string()]);
    assert!(manager.get_option("name").is_some_and(|option| option.value().is_none()));
    assert_eq!(
        manager.dump().to_json(),
        json!({"demo_nested": {}, "name": null})
    );

    let error = manager
        .set_option_types(&[ValueConfigOption::descriptor()])
        .unwrap_err();
    assert!(matches!(error, ConfigError::InvalidOption { .. }));
    Ok(())
}

#[test]
fn test_dump_round_trips_through_text_formats() -> anyhow::Result<()> {
    let mut manager = demo_manager();
    manager.load_yaml_str(
        "name: yaml\ndemo_union:\n  key: value\nchildren:\n  - name: child\n    demo_list: [1, 2]\n",
    )?;

    let expected = json!({
        "name": "yaml",
        "demo_union": {"key": "value"},
        "children": [{"name": "child", "demo_list": [1, 2]}]
    });
    assert_eq!(manager.dump().to_json(), expected);

    let mut reloaded = demo_manager();
    reloaded.load_json_str(&manager.dump_json()?)?;
    assert_eq!(reloaded.dump().to_json(), expected);

    let mut from_toml = demo_manager();
    from_toml.load_toml_str(
        "name = \"yaml\"\n\n[demo_union]\nkey = \"value\"\n\n[[children]]\nname = \"child\"\ndemo_list = [1, 2]\n",
    )?;
    assert_eq!(from_toml.dump().to_json(), expected);
    Ok(())
}

#[test]
fn test_nested_value_search_over_dump() -> anyhow::Result<()> {
    let mut manager = demo_manager();
    manager.set_value(RawValue::from(json!({
        "name": "root",
        "children": [{"name": "first", "demo_union": {"port": 8080}}]
    })))?;

    let mut tree = NestedConfigValue::new(manager.dump());
    assert_eq!(
        tree.search_value("children.0.demo_union.port", RawValue::Null)
            .get_int()?,
        8080
    );

    tree.set_by_path("global.version", "0.1.0", DEFAULT_PATH_SEPARATOR, true)?;
    assert_eq!(
        tree.search_value("global.version", RawValue::Null).get_str()?,
        "0.1.0"
    );
    Ok(())
}

#[test]
fn test_manager_allowing_undefined_keys() -> anyhow::Result<()> {
    let mut manager = ConfigManager::builder()
        .provider(demo_provider())
        .allow_undefined_keys(true)
        .build();

    manager.set_value(RawValue::from(json!({"name": "ok", "free_form": {"a": 1}})))?;

    assert!(manager.get_option("free_form").is_some());
    assert_eq!(
        manager.dump().to_json(),
        json!({"name": "ok", "free_form": {"a": 1}})
    );
    Ok(())
}

/// 指定允许类型的单值选项描述符
fn value_descriptor(name: &'static str, allowed_type: ValueType) -> OptionDescriptor {
    OptionDescriptor::new(name, "ValueConfigOption", move |context| -> Box<dyn ConfigOption> {
        Box::new(ValueConfigOption::with_allowed_type(context, allowed_type.clone()))
    })
}

fn resolver_manager(descriptors: Vec<OptionDescriptor>) -> ConfigManager {
    ConfigManager::builder()
        .key("resolver_manager")
        .provider(StaticOptionsProvider::new("resolvers").with_descriptors(descriptors))
        .build()
}

#[test]
fn test_resolver_injects_registered_key() -> anyhow::Result<()> {
    let content = value_descriptor("content", ValueType::Any).with_resolver(|mut config| {
        if config.contains_key("content") {
            config
                .entry("title".to_string())
                .or_insert_with(|| ConfigEntry::Raw(RawValue::from("auto")));
        }
        Ok(config)
    });
    let mut manager = resolver_manager(vec![content, value_descriptor("title", ValueType::Str)]);

    manager.set_value(RawValue::dict([("content", 1)]))?;

    assert_eq!(manager.dump().to_json(), json!({"content": 1, "title": "auto"}));
    assert_eq!(
        manager.get_option_at("title").map(|option| option.path().to_string()),
        Some("title".to_string())
    );

    // 已有的键不会被覆盖
    let mut manager = resolver_manager(vec![
        value_descriptor("content", ValueType::Any).with_resolver(|mut config| {
            config
                .entry("title".to_string())
                .or_insert_with(|| ConfigEntry::Raw(RawValue::from("auto")));
            Ok(config)
        }),
        value_descriptor("title", ValueType::Str),
    ]);
    manager.set_value(RawValue::dict([("title", "explicit")]))?;
    assert_eq!(manager.get_option_value("title").get_str()?, "explicit");
    Ok(())
}

#[test]
fn test_resolver_injected_key_is_validated() {
    let content = value_descriptor("content", ValueType::Any).with_resolver(|mut config| {
        config.insert(
            "should_exist".to_string(),
            ConfigEntry::Raw(RawValue::Bool(true)),
        );
        Ok(config)
    });
    let mut manager = resolver_manager(vec![content]);

    match manager.set_value(RawValue::dict([("content", 1)])).unwrap_err() {
        ConfigError::InvalidOption { unknown, owner, allowed } => {
            assert_eq!(unknown, "should_exist");
            assert_eq!(owner, "resolver_manager");
            assert_eq!(allowed, "content");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // 注入的值同样按选项类型校验
    let typed = value_descriptor("count", ValueType::Int).with_resolver(|mut config| {
        config.insert("count".to_string(), ConfigEntry::Raw(RawValue::from("many")));
        Ok(config)
    });
    let mut manager = resolver_manager(vec![typed]);
    assert!(matches!(
        manager.set_value(RawValue::Dict(Default::default())),
        Err(ConfigError::NotAllowedValueType { .. })
    ));
}

#[test]
fn test_resolvers_run_in_registry_order() -> anyhow::Result<()> {
    fn append_trace(mut config: DictConfig, step: &str) -> DictConfig {
        let trace = match config.get("trace").and_then(ConfigEntry::as_raw) {
            Some(RawValue::Str(trace)) => format!("{trace},{step}"),
            _ => step.to_string(),
        };
        config.insert("trace".to_string(), ConfigEntry::Raw(RawValue::from(trace)));
        config
    }

    // 登记顺序与名称顺序相反
    let mut manager = resolver_manager(vec![
        value_descriptor("beta", ValueType::Any)
            .with_resolver(|config| Ok(append_trace(config, "beta"))),
        value_descriptor("alpha", ValueType::Any)
            .with_resolver(|config| Ok(append_trace(config, "alpha"))),
        value_descriptor("trace", ValueType::Str),
    ]);

    manager.set_value(RawValue::dict([("alpha", 1)]))?;

    assert_eq!(manager.get_option_value("trace").get_str()?, "alpha,beta");
    assert!(manager.get_option("beta").is_none());
    Ok(())
}
