//! 可观测性契约：结构化日志的最小访问集。
//!
//! # 设计缘起（Why）
//! - 配置核心自身不绑定任何日志后端，但弃用告警与引导期设置变更都需要一个
//!   稳定的结构化输出通道；由调用方在引导期注入实现。
//! - 契约层只定义对象安全的 [`Logger`] Trait 与配套的数据结构，宿主可以把它
//!   桥接到自家的日志/告警体系，避免在公共 API 上强绑定具体实现。
//!
//! # 总体结构（How）
//! - [`Logger`]：唯一的注入点，按 [`LogRecord`] 写出一条结构化日志；
//! - [`OwnedAttributeSet`]：拥有型字段集合，调用方逐个 `push_owned` 后以切片
//!   borrow 给日志记录；
//! - [`keys`]：稳定字段名契约，日志、告警平台据此解析，避免键名漂移；
//! - [`NoopLogger`]：官方维护的空实现，供测试与未注入日志的宿主复用。
//!
//! # 契约约束（What）
//! - 实现者必须满足 `Send + Sync`，日志调用不得阻塞核心路径；
//! - 记录内容仅在 `log` 调用期间有效，实现者如需持久化必须自行拷贝。

use core::fmt;
use std::borrow::Cow;

use crate::sealed::Sealed;

pub mod keys;

/// 日志严重级别。
///
/// 取值与业界通行的四级模型对齐；配置核心内部只使用 `Debug`（设置变更）与
/// `Warn`（弃用告警）两档，其余档位留给宿主扩展。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSeverity {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    /// 返回级别的稳定字符串描述。
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 结构化字段值。
///
/// # 契约说明（What）
/// - 覆盖文本、布尔与数值三类基础形态，足以承载弃用元数据与配置代次；
/// - 通过 `From` 实现支持从常见原生类型无感转换。
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Text(Cow<'static, str>),
    Bool(bool),
    I64(i64),
    F64(f64),
}

impl From<&'static str> for AttributeValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        // u64 超出 i64 的部分在日志语境下可接受饱和语义，代次计数远达不到该量级。
        Self::I64(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

/// 单个结构化字段。
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub key: Cow<'static, str>,
    pub value: AttributeValue,
}

/// 拥有型字段集合。
///
/// # 设计目标（Why）
/// - 调用方（如弃用告警）需要在栈上拼装一组字段再整体写出；
/// - 以 `Vec` 承载并暴露切片视图，避免在契约层引入生命周期复杂度。
#[derive(Clone, Debug, Default)]
pub struct OwnedAttributeSet {
    entries: Vec<KeyValue>,
}

impl OwnedAttributeSet {
    /// 构造空集合。
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个字段；值接受任何可转换为 [`AttributeValue`] 的类型。
    pub fn push_owned(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<AttributeValue>,
    ) {
        self.entries.push(KeyValue {
            key: key.into(),
            value: value.into(),
        });
    }

    /// 以切片视图借出全部字段。
    #[inline]
    pub fn as_slice(&self) -> &[KeyValue] {
        &self.entries
    }
}

/// 一条结构化日志记录的借用视图。
///
/// # 契约说明（What）
/// - 所有引用仅在 `Logger::log` 调用期间有效；
/// - `attributes` 的键名应来自 [`keys`] 模块，保证告警平台可稳定解析。
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    pub severity: LogSeverity,
    pub message: &'a str,
    pub attributes: &'a [KeyValue],
}

/// 结构化日志契约。
///
/// # 教案式说明
/// - **意图 (Why)**：为弃用告警与引导期设置变更提供唯一注入点，宿主按需
///   桥接到自身观测体系；
/// - **契约 (What)**：实现必须线程安全，`log` 不得阻塞；记录的生命周期不跨
///   越调用边界；
/// - **设计权衡 (Trade-offs)**：未引入异步接口——配置核心的日志量级极低
///   （引导期 + 首次弃用触发），同步写出足够且显著简化契约。
pub trait Logger: Send + Sync + Sealed {
    /// 写出一条结构化日志。
    fn log(&self, record: &LogRecord<'_>);

    /// 以 WARN 级别写出带字段的消息，弃用告警的便捷入口。
    fn warn_with_fields(&self, message: &str, fields: &[KeyValue]) {
        self.log(&LogRecord {
            severity: LogSeverity::Warn,
            message,
            attributes: fields,
        });
    }
}

/// 丢弃全部日志的空实现，供测试与未注入日志的宿主复用。
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _record: &LogRecord<'_>) {}
}
