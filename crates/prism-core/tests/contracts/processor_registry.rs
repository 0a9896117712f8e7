//! 处理器按名解析的契约测试：注册表登记、备忘录缓存与兼容写入口。

use std::sync::Arc;

use prism_core::prelude::*;

/// 宿主定制处理器样例。
#[derive(Debug)]
struct AuditingProcessor;

impl Processor for AuditingProcessor {
    fn name(&self) -> &str {
        "app::AuditingProcessor"
    }
}

fn registry_with_auditing() -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::with_default();
    registry.register(Box::new(TypedProcessorFactory::new(
        "app::AuditingProcessor",
        || Arc::new(AuditingProcessor) as Arc<dyn Processor>,
    )));
    registry
}

/// 验证默认解析与备忘录缓存：重复解析返回同一实例。
///
/// # 测试目标（Why）
/// - 默认处理器名出厂即可解析，无需宿主登记；
/// - 配置存储对解析结果做备忘录缓存，重复调用不重新查表。
#[test]
fn default_processor_resolves_and_is_memoized() {
    let config = Configuration::new();

    let first = config.default_processor().expect("默认处理器应可解析");
    assert_eq!(first.name(), DEFAULT_PROCESSOR_NAME);

    let second = config.default_processor().expect("解析应成功");
    assert!(
        Arc::ptr_eq(&first, &second),
        "名称未变更时重复解析必须命中备忘录"
    );
}

/// 验证名称变更重置备忘录：改名后解析新处理器，改回后重新解析默认处理器。
///
/// # 测试步骤（How）
/// 1. 以含 `app::AuditingProcessor` 的注册表构造配置并解析默认处理器；
/// 2. `set_default_processor_name` 改名，解析结果必须指向新处理器；
/// 3. 改回默认名称，再次解析得到默认处理器的新实例。
#[test]
fn name_change_resets_the_memo() {
    let mut config = Configuration::with_registries(
        Arc::new(FormatterRegistry::with_builtins()),
        Arc::new(registry_with_auditing()),
    );

    let default = config.default_processor().expect("解析应成功");
    assert_eq!(default.name(), DEFAULT_PROCESSOR_NAME);

    config.set_default_processor_name("app::AuditingProcessor");
    let auditing = config.default_processor().expect("改名后解析应成功");
    assert_eq!(auditing.name(), "app::AuditingProcessor");
    assert!(!Arc::ptr_eq(&default, &auditing));

    config.set_default_processor_name(DEFAULT_PROCESSOR_NAME);
    let restored = config.default_processor().expect("改回后解析应成功");
    assert_eq!(restored.name(), DEFAULT_PROCESSOR_NAME);
}

/// 验证未登记名称的失败语义：具名错误、不污染备忘录、修正后恢复。
///
/// # 输入/输出契约（What）
/// - **前置条件**：默认处理器名改为未登记的 `"ghost::Processor"`；
/// - **后置条件**：解析返回携带名称的 `UnknownProcessor`；随后改回合法
///   名称，解析立即成功（失败不得写入备忘录）。
#[test]
fn unknown_processor_name_fails_by_name() {
    let mut config = Configuration::new();
    config.set_default_processor_name("ghost::Processor");

    let err = config.default_processor().unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownProcessor {
            name: "ghost::Processor".to_owned()
        }
    );

    config.set_default_processor_name(DEFAULT_PROCESSOR_NAME);
    let recovered = config.default_processor().expect("修正后解析应恢复");
    assert_eq!(recovered.name(), DEFAULT_PROCESSOR_NAME);
}

/// 验证弃用的实例直装入口：绕过注册表直接进入备忘录。
#[test]
fn legacy_instance_setter_installs_into_the_memo() {
    let mut config = Configuration::new();

    #[allow(deprecated)]
    config.set_default_processor_instance(Arc::new(AuditingProcessor));

    let resolved = config.default_processor().expect("直装实例应可解析");
    assert_eq!(
        resolved.name(),
        "app::AuditingProcessor",
        "直装实例优先于注册表解析"
    );

    // 名称变更仍然重置备忘录，回到注册表路径。
    config.set_default_processor_name(DEFAULT_PROCESSOR_NAME);
    let resolved = config.default_processor().expect("解析应成功");
    assert_eq!(resolved.name(), DEFAULT_PROCESSOR_NAME);
}

/// 验证其余兼容写入口落到替代字段上。
#[test]
fn legacy_boolean_setters_write_replacement_fields() {
    let mut config = Configuration::new();

    #[allow(deprecated)]
    config.set_allow_include(false);
    assert!(!config.default_allow_include_to_one());
    assert!(!config.default_allow_include_to_many());

    #[allow(deprecated)]
    config.set_whitelist_all_exceptions(true);
    assert!(config.allow_all_exceptions());
}
