//! 配置快照的契约测试：字段取值与机读序列化。

use std::borrow::Cow;
use std::sync::Arc;

use prism_core::prelude::*;

/// 验证出厂快照与文档基线逐项一致。
///
/// # 测试目标（Why）
/// - 快照是审计与运维留档的机读凭据，默认值漂移必须在此被捕获。
#[test]
fn default_snapshot_matches_the_baseline() {
    let snapshot = Configuration::new().snapshot();

    assert_eq!(snapshot.key_format, "dasherized");
    assert_eq!(snapshot.route_format, "dasherized");
    assert!(snapshot.cache_formatters);
    assert!(snapshot.exception_allowlist.is_empty());
    assert!(!snapshot.allow_all_exceptions);
    assert_eq!(snapshot.resource_key_type, "integer");
    assert_eq!(snapshot.default_paginator, "none");
    assert_eq!(snapshot.default_page_size, 10);
    assert_eq!(snapshot.maximum_page_size, 20);
    assert!(snapshot.top_level_links_include_pagination);
    assert_eq!(snapshot.top_level_meta_record_count_key, "record_count");
    assert_eq!(snapshot.top_level_meta_page_count_key, "page_count");
    assert!(!snapshot.include_backtraces_in_errors);
    assert!(snapshot.allow_transactions);
    assert_eq!(snapshot.default_processor_name, DEFAULT_PROCESSOR_NAME);
    assert_eq!(snapshot.resource_cache, None, "默认不安装缓存后端");
    assert_eq!(snapshot.default_resource_cache_field, "updated_at");
    assert!(snapshot.default_exclude_links.is_empty());
}

/// 宿主注入的缓存后端样例。
struct MemoryStore;

impl ResourceCache for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }
}

/// 验证缓存后端句柄以名称形式进入快照，卸下后恢复为空。
#[test]
fn snapshot_records_the_resource_cache_by_name() {
    let mut config = Configuration::new();

    config.set_resource_cache(Some(Arc::new(MemoryStore)));
    assert_eq!(config.snapshot().resource_cache.as_deref(), Some("memory"));

    config.set_resource_cache(None);
    assert_eq!(config.snapshot().resource_cache, None);
}

/// 验证快照反映写入后的状态，且仅反映调用时刻的状态。
#[test]
fn snapshot_reflects_mutations_at_capture_time() {
    let mut config = Configuration::new();
    config.set_key_format(tags::CAMELIZED);
    config.set_exception_allowlist([Cow::Borrowed("app::DomainError")]);
    config.set_default_page_size(25);
    config.set_default_exclude_links(LinkExclusion::Only(vec![LinkKind::Related]));

    let before = config.snapshot();
    assert_eq!(before.key_format, "camelized");
    assert_eq!(before.exception_allowlist, vec!["app::DomainError".to_owned()]);
    assert_eq!(before.default_page_size, 25);
    assert_eq!(before.default_exclude_links, vec!["related".to_owned()]);

    config.set_key_format(tags::UNDERSCORED);
    assert_eq!(before.key_format, "camelized", "快照是调用时刻的拷贝");
    assert_eq!(config.snapshot().key_format, "underscored");
}

/// 验证快照可直接序列化为 JSON 供外部工具消费。
#[test]
fn snapshot_serializes_to_json() {
    let mut config = Configuration::new();
    config.set_allow_all_exceptions(true);
    config.set_default_paginator(DefaultPaginator::Paged);

    let value = serde_json::to_value(config.snapshot()).expect("快照应可序列化");
    assert_eq!(value["key_format"], "dasherized");
    assert_eq!(value["allow_all_exceptions"], true);
    assert_eq!(value["default_paginator"], "paged");
    assert_eq!(value["default_page_size"], 10);
    assert!(value["exception_allowlist"].as_array().is_some_and(|list| list.is_empty()));
}
