//! 异常放行谓词的契约测试：名称交集、祖先匹配与全量放行开关。

use std::borrow::Cow;

use prism_core::prelude::*;

/// 领域基错误：祖先链只有自身与根。
struct DomainError;

impl ExceptionAncestry for DomainError {
    fn ancestors(&self) -> &[&'static str] {
        &["app::DomainError", "core::Error"]
    }
}

/// 子类型错误：链上携带父类型名。
struct RecordNotFound;

impl ExceptionAncestry for RecordNotFound {
    fn ancestors(&self) -> &[&'static str] {
        &["app::RecordNotFound", "app::DomainError", "core::Error"]
    }
}

/// 与名单毫无交集的错误。
struct TimeoutError;

impl ExceptionAncestry for TimeoutError {
    fn ancestors(&self) -> &[&'static str] {
        &["net::TimeoutError", "core::Error"]
    }
}

fn allowlisted(names: &[&'static str]) -> Configuration {
    let mut config = Configuration::new();
    config.set_exception_allowlist(names.iter().map(|name| Cow::Borrowed(*name)));
    config
}

/// 验证精确匹配：名单命中具体类型名即放行。
///
/// # 输入/输出契约（What）
/// - **前置条件**：名单为 `["app::DomainError"]`；
/// - **后置条件**：`DomainError` 放行，`TimeoutError` 不放行；谓词不修改
///   任何状态，可重复调用。
#[test]
fn exact_name_match_allows_the_error() {
    let config = allowlisted(&["app::DomainError"]);

    assert!(config.exception_allowed(&DomainError));
    assert!(!config.exception_allowed(&TimeoutError));
    assert!(config.exception_allowed(&DomainError), "谓词应为纯函数");
}

/// 验证祖先匹配：名单中的父类型名使所有子类型随之放行。
///
/// # 测试目标（Why）
/// - 放行判定是祖先名链与名单的非空交集，而非仅比对具体类型名；
/// - 宿主只需在名单登记基类型，即可放行整个错误族。
#[test]
fn ancestor_name_match_allows_subtypes() {
    let config = allowlisted(&["app::DomainError"]);

    assert!(
        config.exception_allowed(&RecordNotFound),
        "子类型的祖先链包含名单项时必须放行"
    );
}

/// 验证无交集场景：名单非空但与祖先链不相交时拒绝放行。
#[test]
fn unrelated_error_is_not_allowed() {
    let config = allowlisted(&["app::RecordNotFound"]);

    assert!(
        !config.exception_allowed(&DomainError),
        "名单中的子类型名不得反向放行其父类型"
    );
    assert!(!config.exception_allowed(&TimeoutError));
}

/// 验证空名单基线与全量放行开关的短路语义。
#[test]
fn allow_all_exceptions_bypasses_the_allowlist() {
    let mut config = Configuration::new();
    assert!(
        !config.exception_allowed(&DomainError),
        "默认空名单不放行任何异常"
    );

    config.set_allow_all_exceptions(true);
    assert!(config.exception_allowed(&DomainError));
    assert!(config.exception_allowed(&TimeoutError), "开关为真时名单被短路");

    config.set_allow_all_exceptions(false);
    assert!(!config.exception_allowed(&TimeoutError), "关闭后恢复名单判定");
}

/// 验证弃用旧名入口与新名单字段共享存储。
#[test]
fn legacy_allowlist_setter_writes_the_same_field() {
    let mut config = Configuration::new();

    #[allow(deprecated)]
    config.set_exception_class_whitelist([Cow::Borrowed("app::DomainError")]);

    assert!(
        config.exception_allowed(&RecordNotFound),
        "旧名入口写入的名单必须参与同一判定"
    );
    assert_eq!(config.exception_allowlist(), &[Cow::Borrowed("app::DomainError")]);
}
