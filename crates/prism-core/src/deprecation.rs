//! 弃用生命周期管理模块，为配置存储提供统一的“标注 + 运行时告警”能力。
//!
//! # 设计动机（Why）
//! - 配置存储携带若干已更名设置的兼容写入口（`allow_include`、
//!   `whitelist_all_exceptions` 等），每个入口都必须在运行时给出可执行告警，
//!   且保障至少两个版本的过渡窗口。
//! - 集中管理元信息与告警逻辑，避免各写入口重复实现 `AtomicBool` 与日志
//!   拼装代码。
//! - 宿主框架在不同版本中曾将弃用告警入口设为受限 API；本模块即调用方唯一
//!   的稳定入口，内部自行选择输出机制（注入的日志或标准错误降级）。
//!
//! # 功能概览（How）
//! - [`DeprecationNotice`]：封装弃用符号元数据与一次性告警开关。
//! - [`DeprecationNotice::emit`]：首次调用时输出 WARN 日志，后续调用静默。
//! - 模块尾部的 `LEGACY_*` 常量：配置存储全部兼容写入口的弃用元数据。
//!
//! # 使用契约（What）
//! - **前置条件**：调用方在触发弃用路径时显式传入日志句柄；若缺失则退化至
//!   标准错误输出。
//! - **后置条件**：每个公告至多输出一次，避免日志风暴。
//!
//! # 风险提示（Trade-offs & Gotchas）
//! - `AtomicBool` 使用 `SeqCst` 内存序，确保多线程场景下不会重复告警，
//!   代价是极轻微的性能成本。
//! - 常量元数据在编译期固定；版本号变更时需同步更新 `removal` 字段。

use core::sync::atomic::{AtomicBool, Ordering};

use crate::observability::{
    Logger, OwnedAttributeSet, keys::logging::deprecation as deprecation_fields,
};

/// 描述单个弃用符号的元信息与告警状态。
///
/// # 结构意图（Why）
/// - 将“符号标识 + 生效版本 + 计划移除版本 + 替代方案”打包，日志中输出完整
///   上下文，帮助一线同学直接完成迁移。
/// - 内部 `AtomicBool` 记录是否已告警，避免多次输出造成噪音。
///
/// # 字段说明（What）
/// - `symbol`：符号全名，遵循 `module::item` 命名以便定位。
/// - `since`：宣告弃用的版本。
/// - `removal`：计划移除的目标版本。
/// - `replacement`：替代 API 提示，可为空。
/// - `emitted`：内部状态位，记录是否已输出过告警。
#[derive(Debug)]
pub struct DeprecationNotice {
    symbol: &'static str,
    since: &'static str,
    removal: &'static str,
    replacement: Option<&'static str>,
    emitted: AtomicBool,
}

impl DeprecationNotice {
    /// 构造新的弃用告警描述。
    ///
    /// # 前置条件
    /// - 所有字符串必须是 `'static` 生命周期，保证全局常量可安全引用；
    /// - `since` / `removal` 使用 `MAJOR.MINOR.PATCH` 语义化版本字符串。
    ///
    /// # 后置条件
    /// - 返回的结构体初始 `emitted = false`，尚未触发告警。
    pub const fn new(
        symbol: &'static str,
        since: &'static str,
        removal: &'static str,
        replacement: Option<&'static str>,
    ) -> Self {
        Self {
            symbol,
            since,
            removal,
            replacement,
            emitted: AtomicBool::new(false),
        }
    }

    /// 在运行时触发弃用告警。
    ///
    /// # 执行流程（How）
    /// 1. `compare_exchange` 检查告警是否已发送；若已发送则直接返回。
    /// 2. 构造结构化字段集合，携带符号、版本与替代方案。
    /// 3. 若提供日志句柄则输出 WARN 日志；否则回退到标准错误输出。
    ///
    /// # 契约约束（What）
    /// - **输入**：`logger` 可为空，表示宿主暂未注入结构化日志。
    /// - **前置条件**：仅在真正进入弃用路径时触发，避免误报。
    /// - **后置条件**：首次调用后 `emitted == true`，后续调用静默。
    pub fn emit(&self, logger: Option<&dyn Logger>) {
        if self
            .emitted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let mut fields = OwnedAttributeSet::new();
        fields.push_owned(deprecation_fields::FIELD_SYMBOL, self.symbol);
        fields.push_owned(deprecation_fields::FIELD_SINCE, self.since);
        fields.push_owned(deprecation_fields::FIELD_REMOVAL, self.removal);
        if let Some(replacement) = self.replacement {
            fields.push_owned(deprecation_fields::FIELD_REPLACEMENT, replacement);
        }

        if let Some(logger) = logger {
            logger.warn_with_fields(
                "调用了已弃用的配置入口：请按照替代方案尽快完成迁移。",
                fields.as_slice(),
            );
        } else {
            use std::io::Write;
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "[prism-core][deprecation] symbol={symbol} since={since} removal={removal} replacement={replacement:?}",
                symbol = self.symbol,
                since = self.since,
                removal = self.removal,
                replacement = self.replacement,
            );
        }
    }

    /// 返回当前告警是否已经触发，主要用于测试断言。
    pub fn has_emitted(&self) -> bool {
        self.emitted.load(Ordering::SeqCst)
    }
}

/// `Configuration::set_allow_include` 的弃用元数据。
///
/// 粗粒度的 `allow_include` 已拆分为 to-one / to-many 两个独立开关。
pub static LEGACY_ALLOW_INCLUDE: DeprecationNotice = DeprecationNotice::new(
    "prism_core::configuration::Configuration::set_allow_include",
    "0.1.0",
    "0.3.0",
    Some("改用 set_default_allow_include_to_one 与 set_default_allow_include_to_many"),
);

/// `Configuration::set_whitelist_all_exceptions` 的弃用元数据。
pub static LEGACY_WHITELIST_ALL_EXCEPTIONS: DeprecationNotice = DeprecationNotice::new(
    "prism_core::configuration::Configuration::set_whitelist_all_exceptions",
    "0.1.0",
    "0.3.0",
    Some("改用 set_allow_all_exceptions"),
);

/// `Configuration::set_exception_class_whitelist` 的弃用元数据。
pub static LEGACY_EXCEPTION_CLASS_WHITELIST: DeprecationNotice = DeprecationNotice::new(
    "prism_core::configuration::Configuration::set_exception_class_whitelist",
    "0.1.0",
    "0.3.0",
    Some("改用 set_exception_allowlist"),
);

/// `Configuration::set_default_processor_instance` 的弃用元数据。
///
/// 直接安装处理器实例绕过了注册表，失去按名称审计与热替换能力。
pub static LEGACY_PROCESSOR_INSTANCE: DeprecationNotice = DeprecationNotice::new(
    "prism_core::configuration::Configuration::set_default_processor_instance",
    "0.1.0",
    "0.3.0",
    Some("改用 set_default_processor_name 并在处理器注册表登记工厂"),
);
