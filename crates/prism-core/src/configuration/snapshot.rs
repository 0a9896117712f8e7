//! 配置存储的可序列化快照。
//!
//! # 设计背景（Why）
//! - 审计与运维需要在引导完成后留存一份“生效配置”的机读记录；快照只收录
//!   标量设置，可调用项（摘要函数、上报函数）与注册表不参与序列化。
//! - 直接在快照类型上派生 `serde::Serialize`：快照本身就是为序列化而生的
//!   中间表示，公共 API（`Configuration`）保持与序列化框架解耦。

use serde::Serialize;

/// 标量设置的机读快照。
///
/// 字段与 [`Configuration`](super::Configuration) 的同名设置一一对应；
/// 枚举设置以稳定字符串形式收录。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigurationSnapshot {
    pub key_format: String,
    pub route_format: String,
    pub cache_formatters: bool,
    pub exception_allowlist: Vec<String>,
    pub allow_all_exceptions: bool,
    pub resource_key_type: String,
    pub default_allow_include_to_one: bool,
    pub default_allow_include_to_many: bool,
    pub allow_sort: bool,
    pub allow_filter: bool,
    pub raise_if_parameters_not_allowed: bool,
    pub warn_on_route_setup_issues: bool,
    pub warn_on_missing_routes: bool,
    pub warn_on_performance_issues: bool,
    pub default_paginator: String,
    pub default_page_size: u32,
    pub maximum_page_size: u32,
    pub top_level_links_include_pagination: bool,
    pub top_level_meta_include_record_count: bool,
    pub top_level_meta_record_count_key: String,
    pub top_level_meta_include_page_count: bool,
    pub top_level_meta_page_count_key: String,
    pub use_text_errors: bool,
    pub include_backtraces_in_errors: bool,
    pub include_application_backtraces_in_errors: bool,
    pub always_include_to_one_linkage_data: bool,
    pub always_include_to_many_linkage_data: bool,
    pub allow_transactions: bool,
    pub use_relationship_reflection: bool,
    pub default_processor_name: String,
    pub resource_cache: Option<String>,
    pub default_caching: bool,
    pub default_resource_cache_field: String,
    pub default_exclude_links: Vec<String>,
}
