#![allow(clippy::module_name_repetitions)]

//! # prism-core Prelude
//!
//! ## 教案级说明（Why）
//! - **统一导入面**：为序列化层与宿主应用提供一个稳定、浅路径的导入入口，
//!   避免业务代码中出现大量 `prism_core::formatter::registry::...` 等深层
//!   路径；
//! - **范围控制**：仅收录跨模块高频依赖的契约类型。观测与弃用治理等边缘
//!   模块建议保留明确命名空间以提升可读性。
//!
//! ## 契约定义（What）
//! - Prelude 仅收录稳定契约；新增导出遵循 SemVer，可向后兼容；
//! - 纯 re-export，不引入额外代码路径。

pub use crate::configuration::{
    CacheDigestFn, CacheUsageReportFn, Configuration, ConfigurationSnapshot, DefaultPaginator,
    ExceptionAncestry, LinkExclusion, LinkKind, ResourceCache, ResourceKeyType,
};
pub use crate::error::ConfigError;
pub use crate::formatter::{
    CamelizedFormatter, DasherizedFormatter, Formatter, FormatterFactory, FormatterRegistry,
    TypedFormatterFactory, tags,
};
pub use crate::processor::{
    DEFAULT_PROCESSOR_NAME, DefaultProcessor, Processor, ProcessorFactory, ProcessorRegistry,
    TypedProcessorFactory,
};
