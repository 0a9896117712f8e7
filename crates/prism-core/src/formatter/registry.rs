//! 格式化策略注册表：格式标签到工厂的显式映射。
//!
//! # 设计背景（Why）
//! - 原始设计里格式标签通过运行时反射解析为策略类型，存在加载顺序依赖与
//!   静默失败风险；此处以启动期填充的显式注册表替代，未登记的标签在查找时
//!   以命名错误失败。
//! - 注册表被多线程共享，而策略实例按线程持有；因此工厂必须 `Send + Sync`，
//!   其产物则以 `Rc` 返回给调用线程独占。

use std::borrow::Cow;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::ConfigError;
use crate::sealed::Sealed;

use super::builtin::{CamelizedFormatter, DasherizedFormatter, UnderscoredFormatter};
use super::{Formatter, tags};

/// 对象安全的策略工厂契约。
///
/// # 教案式说明
/// - **意图 (Why)**：注册表需要以统一形态存储内建与自定义策略的构造逻辑；
/// - **契约 (What)**：
///   - `tag` 返回工厂登记时使用的格式标签；
///   - `instantiate` 每次调用都构造一个全新实例，交由调用线程独占；
/// - **前置条件**：工厂自身跨线程共享，必须 `Send + Sync`；产物无此要求。
pub trait FormatterFactory: Send + Sync + Sealed {
    /// 返回工厂对应的格式标签。
    fn tag(&self) -> &str;

    /// 构造一个新的策略实例。
    fn instantiate(&self) -> Rc<dyn Formatter>;
}

/// 将返回具体策略类型的构造闭包包装为对象安全工厂。
///
/// # 行为逻辑（How）
/// - 保存标签与构造闭包；`instantiate` 调用闭包并装箱为 `Rc<dyn Formatter>`。
///
/// # 风险提示（Trade-offs）
/// - 若闭包捕获状态，需自行保证 `Send + Sync`；无状态闭包天然满足。
pub struct TypedFormatterFactory<F, C>
where
    F: Formatter + 'static,
    C: Fn() -> F + Send + Sync,
{
    tag: Cow<'static, str>,
    constructor: C,
    _marker: PhantomData<fn() -> F>,
}

impl<F, C> TypedFormatterFactory<F, C>
where
    F: Formatter + 'static,
    C: Fn() -> F + Send + Sync,
{
    /// 基于标签与构造闭包创建工厂。
    pub fn new(tag: impl Into<Cow<'static, str>>, constructor: C) -> Self {
        Self {
            tag: tag.into(),
            constructor,
            _marker: PhantomData,
        }
    }
}

impl<F, C> FormatterFactory for TypedFormatterFactory<F, C>
where
    F: Formatter + 'static,
    C: Fn() -> F + Send + Sync,
{
    fn tag(&self) -> &str {
        &self.tag
    }

    fn instantiate(&self) -> Rc<dyn Formatter> {
        Rc::new((self.constructor)())
    }
}

/// 格式标签到工厂的注册表。
///
/// # 教案式说明
/// - **意图 (Why)**：集中持有全部可解析的格式策略，配置存储据此完成惰性
///   校验——设置标签永远成功，解析未登记标签时返回
///   [`ConfigError::UnknownFormatter`]。
/// - **契约 (What)**：
///   - 注册表在引导期填充，随后只读共享；
///   - 重复注册同一标签时后写覆盖（与标量设置“last write wins”规则一致），
///     遮蔽内建策略被视为有意的定制而非冲突；
/// - **设计权衡 (Trade-offs)**：查找按 `&str` 借用进行，避免热路径分配；
///   注册入口收拥有型 `Box`，便于动态装配自定义策略。
pub struct FormatterRegistry {
    factories: HashMap<Cow<'static, str>, Box<dyn FormatterFactory>>,
}

impl FormatterRegistry {
    /// 构造空注册表，供完全自定义的宿主使用。
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// 构造预置三个内建策略的注册表。
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TypedFormatterFactory::new(tags::UNDERSCORED, || {
            UnderscoredFormatter
        })));
        registry.register(Box::new(TypedFormatterFactory::new(tags::CAMELIZED, || {
            CamelizedFormatter
        })));
        registry.register(Box::new(TypedFormatterFactory::new(tags::DASHERIZED, || {
            DasherizedFormatter
        })));
        registry
    }

    /// 登记一个工厂；同名标签后写覆盖。
    pub fn register(&mut self, factory: Box<dyn FormatterFactory>) {
        self.factories
            .insert(Cow::Owned(factory.tag().to_owned()), factory);
    }

    /// 判断标签是否已登记。
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// 按标签构造一个新的策略实例。
    ///
    /// # 失败语义
    /// - 未登记的标签返回 [`ConfigError::UnknownFormatter`]，携带标签原文；
    ///   这是调用方配置错误，不应重试。
    pub fn resolve(&self, tag: &str) -> Result<Rc<dyn Formatter>, ConfigError> {
        self.factories
            .get(tag)
            .map(|factory| factory.instantiate())
            .ok_or_else(|| ConfigError::UnknownFormatter {
                name: tag.to_owned(),
            })
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
