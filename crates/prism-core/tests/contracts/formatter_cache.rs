//! 格式化器解析缓存的契约测试：惰性解析、线程本地缓存、代次失效。

use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use parking_lot::RwLock;
use proptest::prelude::*;

use prism_core::prelude::*;

/// 验证默认配置的解析结果：破折号策略、正反向转换对齐。
///
/// # 测试目标（Why）
/// - 确保出厂默认的键/路由格式均为 `dasherized`，与文档基线一致；
/// - 确保解析出的策略实例正确执行正向与反向转换。
///
/// # 输入/输出契约（What）
/// - **前置条件**：新建配置，不做任何修改；
/// - **后置条件**：`format("fooBar") == "foo-bar"`，`unformat("foo-bar") == "foo_bar"`。
#[test]
fn default_resolution_yields_dasherized_strategy() {
    let config = Configuration::new();

    let key = config.resolve_key_formatter().expect("默认键格式应可解析");
    assert_eq!(key.format("fooBar"), "foo-bar");
    assert_eq!(key.unformat("foo-bar"), "foo_bar");

    let route = config
        .resolve_route_formatter()
        .expect("默认路由格式应可解析");
    assert_eq!(route.format("fooBar"), "foo-bar");
}

/// 验证缓存开启时同线程解析的幂等性：两次解析返回同一实例。
///
/// # 测试步骤（How）
/// 1. 新建配置（缓存默认开启），连续两次解析键格式化器；
/// 2. 以 `Rc::ptr_eq` 断言两次返回指向同一对象。
#[test]
fn cached_resolution_is_idempotent_within_a_thread() {
    let config = Configuration::new();

    let first = config.resolve_key_formatter().expect("首次解析应成功");
    let second = config.resolve_key_formatter().expect("二次解析应成功");
    assert!(
        Rc::ptr_eq(&first, &second),
        "缓存开启且设置未变时，同线程两次解析必须返回同一实例"
    );
}

/// 验证关闭缓存后每次解析都构造全新实例，且不做记忆化装饰。
#[test]
fn disabled_cache_returns_fresh_instances() {
    let mut config = Configuration::new();
    config.set_cache_formatters(false);

    let first = config.resolve_key_formatter().expect("解析应成功");
    let second = config.resolve_key_formatter().expect("解析应成功");
    assert!(
        !Rc::ptr_eq(&first, &second),
        "缓存关闭时每次解析必须返回全新实例"
    );
    assert_eq!(first.format("fooBar"), "foo-bar");
}

/// 验证键格式变更的本线程失效：setter 之后解析返回新策略的新实例。
///
/// # 测试步骤（How）
/// 1. 解析一次键格式化器并留存引用；
/// 2. `set_key_format("underscored")`；
/// 3. 再次解析，断言实例不同且输出遵循新策略。
#[test]
fn key_format_change_invalidates_the_cached_instance() {
    let mut config = Configuration::new();

    let before = config.resolve_key_formatter().expect("解析应成功");
    assert_eq!(before.format("fooBar"), "foo-bar");

    config.set_key_format(tags::UNDERSCORED);

    let after = config.resolve_key_formatter().expect("变更后解析应成功");
    assert!(
        !Rc::ptr_eq(&before, &after),
        "缓存影响设置变更后不得继续命中旧实例"
    );
    assert_eq!(after.format("fooBar"), "foo_bar");
}

/// 验证键/路由槽位相互独立：变更键格式不影响已缓存的路由实例。
#[test]
fn key_and_route_slots_are_independent() {
    let mut config = Configuration::new();

    let route_before = config
        .resolve_route_formatter()
        .expect("路由解析应成功");
    config.set_key_format(tags::CAMELIZED);
    let route_after = config
        .resolve_route_formatter()
        .expect("路由解析应成功");

    assert!(
        Rc::ptr_eq(&route_before, &route_after),
        "键格式变更不得使路由槽位失效"
    );
}

/// 验证惰性校验语义：setter 接受任意标签，错误在解析时刻发出。
///
/// # 输入/输出契约（What）
/// - **前置条件**：设置未登记的格式标签 `"excel"`；
/// - **后置条件**：setter 本身成功；随后的解析返回携带标签名的
///   `UnknownFormatter`，不产生任何缓存状态；
/// - 改回合法标签后解析立即恢复。
#[test]
fn unknown_tag_fails_at_resolution_not_at_assignment() {
    let mut config = Configuration::new();
    config.set_key_format("excel");
    assert_eq!(config.key_format(), "excel", "写入不做校验");

    let err = config.resolve_key_formatter().unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownFormatter {
            name: "excel".to_owned()
        }
    );

    config.set_key_format(tags::DASHERIZED);
    let recovered = config.resolve_key_formatter().expect("修正后解析应恢复");
    assert_eq!(recovered.format("fooBar"), "foo-bar");
}

/// 验证跨线程失效：一个线程的设置变更在另一线程的下一次解析中可见。
///
/// # 测试步骤（How）
/// 1. 配置置于 `Arc<RwLock<_>>`，工作线程先解析并回传 `"fooBar"` 的格式化结果；
/// 2. 主线程确认结果后取写锁执行 `set_key_format("underscored")`，再放行工作线程；
/// 3. 工作线程二次解析，回传的结果必须遵循新策略。
///
/// # 风险提示（Trade-offs）
/// - 通道握手保证两次解析与设置变更严格串行，排除最终一致窗口的干扰。
#[test]
fn setting_change_is_visible_to_other_threads_on_next_lookup() {
    let config = Arc::new(RwLock::new(Configuration::new()));
    let (to_main, from_worker) = mpsc::channel::<String>();
    let (to_worker, from_main) = mpsc::channel::<()>();

    let worker_config = Arc::clone(&config);
    let worker = thread::spawn(move || {
        {
            let guard = worker_config.read();
            let formatter = guard.resolve_key_formatter().expect("首次解析应成功");
            to_main
                .send(formatter.format("fooBar"))
                .expect("主线程应存活");
        }
        from_main.recv().expect("应收到变更完成信号");
        let guard = worker_config.read();
        let formatter = guard.resolve_key_formatter().expect("二次解析应成功");
        to_main
            .send(formatter.format("fooBar"))
            .expect("主线程应存活");
    });

    assert_eq!(from_worker.recv().expect("工作线程应存活"), "foo-bar");

    config.write().set_key_format(tags::UNDERSCORED);
    to_worker.send(()).expect("工作线程应存活");

    assert_eq!(
        from_worker.recv().expect("工作线程应存活"),
        "foo_bar",
        "其他线程在设置变更后的下一次解析必须观察到新策略"
    );

    worker.join().expect("工作线程不应 panic");
}

proptest! {
    /// 性质：记忆化缓存永不改变可观测输出——缓存路径与直连注册表路径
    /// 对任意输入产生相同结果。
    #[test]
    fn cached_and_uncached_paths_agree(
        value in "[a-zA-Z][a-zA-Z0-9_]{0,24}",
        tag in prop_oneof![
            Just(tags::UNDERSCORED),
            Just(tags::CAMELIZED),
            Just(tags::DASHERIZED),
        ],
    ) {
        let mut config = Configuration::new();
        config.set_key_format(tag);
        let cached = config.resolve_key_formatter().expect("内建标签应可解析");

        let registry = FormatterRegistry::with_builtins();
        let direct = registry.resolve(tag).expect("内建标签应可解析");

        prop_assert_eq!(cached.format(&value), direct.format(&value));
        prop_assert_eq!(cached.unformat(&value), direct.unformat(&value));
    }
}
