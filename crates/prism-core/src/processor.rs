//! 处理器注册表：默认操作处理器的按名解析。
//!
//! # 设计背景（Why）
//! - 原始设计通过“字符串安全常量化”把配置中的处理器名称解析为类型，失败时
//!   静默得到空值；此处以启动期填充的显式注册表替代，未登记的名称以
//!   [`ConfigError::UnknownProcessor`] 失败。
//! - 操作处理本身（find / create / update …）属于上层 crate 的职责；本模块
//!   只定义依赖注入缝隙与按名解析协议。
//!
//! # 契约说明（What）
//! - 处理器实例跨线程共享（`Arc<dyn Processor>`），必须 `Send + Sync`；
//! - 配置存储对解析结果做简单备忘录缓存（非线程本地），名称变更时重置。

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::sealed::Sealed;

/// 默认处理器的注册名称。
pub const DEFAULT_PROCESSOR_NAME: &str = "prism::Processor";

/// 操作处理器的最小契约。
///
/// # 教案式说明
/// - **意图 (Why)**：配置核心只需要“可按名解析、可跨线程共享”的处理器
///   句柄；具体的操作分发接口由上层 crate 扩展本契约定义。
/// - **契约 (What)**：`name` 返回注册表登记名称，供日志与往返校验使用；
///   实现必须 `Send + Sync + 'static`。
pub trait Processor: Send + Sync + std::fmt::Debug + Sealed {
    /// 返回处理器的稳定名称。
    fn name(&self) -> &str;
}

/// 处理器工厂契约。
pub trait ProcessorFactory: Send + Sync + Sealed {
    /// 返回工厂登记名称。
    fn name(&self) -> &str;

    /// 构造（或复用）一个处理器实例。
    fn instantiate(&self) -> Arc<dyn Processor>;
}

/// 将构造闭包包装为对象安全的处理器工厂。
pub struct TypedProcessorFactory<C>
where
    C: Fn() -> Arc<dyn Processor> + Send + Sync,
{
    name: Cow<'static, str>,
    constructor: C,
}

impl<C> TypedProcessorFactory<C>
where
    C: Fn() -> Arc<dyn Processor> + Send + Sync,
{
    /// 基于名称与构造闭包创建工厂。
    pub fn new(name: impl Into<Cow<'static, str>>, constructor: C) -> Self {
        Self {
            name: name.into(),
            constructor,
        }
    }
}

impl<C> ProcessorFactory for TypedProcessorFactory<C>
where
    C: Fn() -> Arc<dyn Processor> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn instantiate(&self) -> Arc<dyn Processor> {
        (self.constructor)()
    }
}

/// 框架自带的兜底处理器。
///
/// 上层未定制时，处理器名默认指向它；除名称外不承载任何行为。
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultProcessor;

impl Processor for DefaultProcessor {
    fn name(&self) -> &str {
        DEFAULT_PROCESSOR_NAME
    }
}

/// 处理器名称到工厂的注册表。
///
/// 重复注册同一名称时后写覆盖，规则与格式化注册表一致。
pub struct ProcessorRegistry {
    factories: HashMap<Cow<'static, str>, Box<dyn ProcessorFactory>>,
}

impl ProcessorRegistry {
    /// 构造空注册表。
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// 构造预置 [`DefaultProcessor`] 的注册表。
    pub fn with_default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TypedProcessorFactory::new(
            DEFAULT_PROCESSOR_NAME,
            || Arc::new(DefaultProcessor) as Arc<dyn Processor>,
        )));
        registry
    }

    /// 登记一个工厂；同名后写覆盖。
    pub fn register(&mut self, factory: Box<dyn ProcessorFactory>) {
        self.factories
            .insert(Cow::Owned(factory.name().to_owned()), factory);
    }

    /// 判断名称是否已登记。
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 按名称构造处理器实例。
    ///
    /// # 失败语义
    /// - 未登记的名称返回 [`ConfigError::UnknownProcessor`]；属调用方配置
    ///   错误，不应重试。
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Processor>, ConfigError> {
        self.factories
            .get(name)
            .map(|factory| factory.instantiate())
            .ok_or_else(|| ConfigError::UnknownProcessor {
                name: name.to_owned(),
            })
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_default()
    }
}
