//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 为配置核心对外暴露的失败语义提供集中定义：所有错误都属于
//!   “配置期或首次使用期”故障，同步返回调用方，不存在重试或部分失败状态。
//! - 延迟校验是刻意设计：设置格式标签时不做校验，解析失败发生在查找时刻，
//!   因此错误需要携带触发查找的名称以便排障。
//!
//! ## 设计要求（What）
//! - 错误类型实现 `thiserror::Error` 以兼容 `std::error::Error` 生态；
//! - 变体保持细粒度，便于调用方精确匹配并给出针对性的修复提示。

use thiserror::Error;

/// 配置核心的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：聚合格式化策略与处理器两条注册表查找路径的失败，保证
///   “惰性校验”语义拥有统一且可机读的出口。
/// - **契约 (What)**：
///   - 所有变体均满足 `Send + Sync + 'static`，可安全跨线程传播；
///   - 变体携带触发失败的名称，调用方可直接回显到日志或错误响应中；
///   - 这些失败均指向调用方配置错误，不应自动重试。
/// - **设计权衡 (Trade-offs)**：名称以 `String` 存储，牺牲一次堆分配换取
///   错误实例与配置存储生命周期解耦。
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// 请求的格式标签没有对应的已注册策略。
    ///
    /// - **意图 (Why)**：格式标签在设置时不做校验，首次解析时才发现拼写或
    ///   注册遗漏，需要立刻把问题暴露给调用方。
    /// - **契约 (What)**：`name` 为触发查找的标签原文；错误不会被缓存，
    ///   修正注册表或标签后重新解析即可恢复。
    #[error("no formatter strategy registered for format tag `{name}`")]
    UnknownFormatter { name: String },

    /// 默认处理器名称在处理器注册表中不存在。
    ///
    /// - **意图 (Why)**：以显式注册表取代“字符串安全常量化”，未登记的名称
    ///   必须以命名错误失败，而非静默得到空值。
    /// - **契约 (What)**：`name` 为查找失败的处理器名称；惰性解析的备忘录
    ///   在失败时保持为空，下次调用会重新查找。
    #[error("no processor registered under name `{name}`")]
    UnknownProcessor { name: String },
}
