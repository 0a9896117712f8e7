#![deny(unsafe_code)]
#![allow(private_bounds)]
#![doc = "prism-core: JSON:API 资源序列化框架的配置、格式化与弃用治理核心契约。"]
#![doc = ""]
#![doc = "== 兼容性与版本治理 =="]
#![doc = "本 Crate 遵守语义化版本 2.0 (SemVer)。"]
#![doc = "1. 破坏性变更 (Breaking Change): 仅允许在 MAJOR 版本中引入。"]
#![doc = "2. 弃用 (Deprecation): API 弃用必须至少提前 1 个 MINOR 版本公告，并保留运行时告警（参见 [`deprecation`] 模块）。"]
#![doc = "3. 契约测试: 任何对配置/缓存协议的变更，必须同步更新 `tests/contracts/` 并确保 100% 通过。"]
#![doc = ""]
#![doc = "== 核心职责 =="]
#![doc = "- [`configuration`]：进程级配置存储，含格式化器的线程本地缓存与代次失效协议；"]
#![doc = "- [`formatter`]：键/路由格式化策略契约、内建策略与显式注册表；"]
#![doc = "- [`processor`]：处理器契约与命名注册表，取代字符串到类型的隐式反射；"]
#![doc = "- [`deprecation`]：一次性弃用告警治理；"]
#![doc = "- [`observability`]：结构化日志门面与字段命名字典。"]

mod sealed;

pub mod configuration;
pub mod deprecation;
pub mod error;
pub mod formatter;
pub mod observability;
pub mod processor;

pub mod prelude;

pub use configuration::{
    CacheDigestFn, CacheUsageReportFn, Configuration, ConfigurationSnapshot, DefaultPaginator,
    ExceptionAncestry, LinkExclusion, LinkKind, ResourceCache, ResourceKeyType,
};
pub use error::ConfigError;
pub use formatter::{
    CamelizedFormatter, DasherizedFormatter, Formatter, FormatterFactory, FormatterRegistry,
    MemoizedFormatter, TypedFormatterFactory, UnderscoredFormatter,
};
pub use processor::{
    DEFAULT_PROCESSOR_NAME, DefaultProcessor, Processor, ProcessorFactory, ProcessorRegistry,
    TypedProcessorFactory,
};
