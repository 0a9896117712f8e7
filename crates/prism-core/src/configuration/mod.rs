//! 配置存储：进程级可变配置对象与格式化器解析缓存。
//!
//! # 设计缘起（Why）
//! - 序列化框架的全部可调设置集中于一个进程级对象：键/路由格式、分页默认
//!   值、元数据与链接开关、资源缓存参数、异常放行策略。
//! - 其中唯一具备非平凡不变式的部分是**格式化器解析**：策略实例按线程缓存
//!   （惰性解析 + 记忆化装饰），而缓存影响设置可能在任意线程被修改，必须
//!   保证所有线程在下一次查找时观察到新设置。
//!
//! # 总体结构（How）
//! - [`Configuration`]：显式构造的配置对象。引导期通过 `&mut self` setter
//!   写入，随后以共享引用并发只读；热重配置需由宿主在外层加写锁，读方容忍
//!   一次在途调用观察到旧策略（最终一致）。
//! - 代次协议：`key` / `route` 两个槽位各有一个共享 `AtomicU64` 代次计数，
//!   三个缓存影响 setter（`set_key_format` / `set_route_format` /
//!   `set_cache_formatters`）自增相应计数；各线程槽位存放实例时附带构建
//!   代次，查找先比对代次，不一致即重新解析——失效无需触达他线程存储。
//! - 异常放行：`exception_allowed` 对错误的有序祖先名链与放行名单做交集
//!   判定，`allow_all_exceptions` 为真时短路放行。
//!
//! # 契约约束（What）
//! - 设置枚举值不做写入期校验；未登记的格式标签在解析时以
//!   [`ConfigError::UnknownFormatter`] 失败（惰性校验是刻意设计）。
//! - 标量设置遵循“last write wins”，无相互作用不变式。
//! - 对象生命周期：进程启动时构造一次，进程退出前不销毁。

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::deprecation;
use crate::error::ConfigError;
use crate::formatter::{Formatter, FormatterRegistry, MemoizedFormatter, tags};
use crate::observability::{
    LogRecord, LogSeverity, Logger, OwnedAttributeSet,
    keys::logging::configuration as configuration_fields,
};
use crate::processor::{DEFAULT_PROCESSOR_NAME, Processor, ProcessorRegistry};

mod cache;
mod settings;
mod snapshot;

use cache::FormatterSlot;
pub use settings::{
    CacheDigestFn, CacheUsageReportFn, DefaultPaginator, LinkExclusion, LinkKind, ResourceCache,
    ResourceKeyType,
};
pub use snapshot::ConfigurationSnapshot;

/// 异常祖先链查询能力。
///
/// # 教案式说明
/// - **意图 (Why)**：放行名单存储的是*类型名*而非类型引用，避免名单配置与
///   编译期类型产生加载顺序耦合；为此需要错误类型显式暴露自己的祖先名链，
///   取代运行时反射式的祖先遍历。
/// - **契约 (What)**：
///   - 返回的切片从具体类型名开始，按继承层级向根排列；
///   - 名链为 `'static` 字符串，实现方通常直接返回常量切片，判定零分配；
/// - **设计权衡 (Trade-offs)**：名链由实现方维护而非编译器派生，存在漏写
///   风险；换来的是名单可以引用尚未链接进来的类型名（部署期解耦）。
pub trait ExceptionAncestry {
    /// 返回从具体类型开始、按继承顺序排列的祖先类型名链。
    fn ancestors(&self) -> &[&'static str];
}

/// 进程级配置存储。
///
/// # 教案式说明
/// - **意图 (Why)**：以显式构造的对象取代隐式全局单例，给配置一个可文档化
///   的初始化/共享生命周期；所有读路径都是纯内存同步计算，无阻塞无 IO。
/// - **契约 (What)**：
///   - `Send + Sync`：引导完成后可放入 `Arc`（或 `Arc<RwLock<_>>`）并发读；
///   - setter 均为 `&mut self`，把“引导期独占写”编码进类型系统；
///   - 格式化器解析的幂等性：缓存开启且无设置变更时，同线程两次解析返回
///     同一实例（`Rc::ptr_eq` 成立）。
/// - **风险提示 (Trade-offs)**：热重配置下读方可能在一次在途调用中使用旧
///   策略，这是文档化的最终一致语义，不做更强的同步保证。
pub struct Configuration {
    store_id: u64,
    logger: Option<Arc<dyn Logger>>,

    // 格式化器解析
    key_format: Cow<'static, str>,
    route_format: Cow<'static, str>,
    cache_formatters: bool,
    key_generation: AtomicU64,
    route_generation: AtomicU64,
    formatters: Arc<FormatterRegistry>,

    // 异常放行策略
    exception_allowlist: Vec<Cow<'static, str>>,
    allow_all_exceptions: bool,

    // 处理器解析
    processors: Arc<ProcessorRegistry>,
    default_processor_name: Cow<'static, str>,
    default_processor_memo: Mutex<Option<Arc<dyn Processor>>>,

    // 请求特性开关
    resource_key_type: ResourceKeyType,
    default_allow_include_to_one: bool,
    default_allow_include_to_many: bool,
    allow_sort: bool,
    allow_filter: bool,
    raise_if_parameters_not_allowed: bool,
    warn_on_route_setup_issues: bool,
    warn_on_missing_routes: bool,
    warn_on_performance_issues: bool,

    // 分页
    default_paginator: DefaultPaginator,
    default_page_size: u32,
    maximum_page_size: u32,
    top_level_links_include_pagination: bool,

    // 顶层元数据
    top_level_meta_include_record_count: bool,
    top_level_meta_record_count_key: Cow<'static, str>,
    top_level_meta_include_page_count: bool,
    top_level_meta_page_count_key: Cow<'static, str>,

    // 错误渲染
    use_text_errors: bool,
    include_backtraces_in_errors: bool,
    include_application_backtraces_in_errors: bool,

    // 资源关系
    always_include_to_one_linkage_data: bool,
    always_include_to_many_linkage_data: bool,
    allow_transactions: bool,
    use_relationship_reflection: bool,

    // 资源缓存
    resource_cache: Option<Arc<dyn ResourceCache>>,
    default_caching: bool,
    default_resource_cache_field: Cow<'static, str>,
    resource_cache_digest_function: CacheDigestFn,
    resource_cache_usage_report_function: Option<CacheUsageReportFn>,

    // 链接排除
    default_exclude_links: LinkExclusion,
}

impl Configuration {
    /// 以内建注册表构造配置存储，所有设置取默认值。
    pub fn new() -> Self {
        Self::with_registries(
            Arc::new(FormatterRegistry::with_builtins()),
            Arc::new(ProcessorRegistry::with_default()),
        )
    }

    /// 以宿主提供的注册表构造配置存储。
    ///
    /// # 契约（What）
    /// - 注册表在传入后只读共享；宿主的自定义策略/处理器须在此之前登记；
    /// - 默认值与 [`new`](Self::new) 完全一致。
    pub fn with_registries(
        formatters: Arc<FormatterRegistry>,
        processors: Arc<ProcessorRegistry>,
    ) -> Self {
        Self {
            store_id: cache::next_store_id(),
            logger: None,

            key_format: Cow::Borrowed(tags::DASHERIZED),
            route_format: Cow::Borrowed(tags::DASHERIZED),
            cache_formatters: true,
            key_generation: AtomicU64::new(0),
            route_generation: AtomicU64::new(0),
            formatters,

            exception_allowlist: Vec::new(),
            allow_all_exceptions: false,

            processors,
            default_processor_name: Cow::Borrowed(DEFAULT_PROCESSOR_NAME),
            default_processor_memo: Mutex::new(None),

            resource_key_type: ResourceKeyType::Integer,
            default_allow_include_to_one: true,
            default_allow_include_to_many: true,
            allow_sort: true,
            allow_filter: true,
            raise_if_parameters_not_allowed: true,
            warn_on_route_setup_issues: true,
            warn_on_missing_routes: true,
            warn_on_performance_issues: true,

            default_paginator: DefaultPaginator::None,
            default_page_size: 10,
            maximum_page_size: 20,
            top_level_links_include_pagination: true,

            top_level_meta_include_record_count: false,
            top_level_meta_record_count_key: Cow::Borrowed("record_count"),
            top_level_meta_include_page_count: false,
            top_level_meta_page_count_key: Cow::Borrowed("page_count"),

            use_text_errors: false,
            include_backtraces_in_errors: false,
            include_application_backtraces_in_errors: false,

            always_include_to_one_linkage_data: false,
            always_include_to_many_linkage_data: false,
            allow_transactions: true,
            use_relationship_reflection: false,

            resource_cache: None,
            default_caching: false,
            default_resource_cache_field: Cow::Borrowed("updated_at"),
            resource_cache_digest_function: settings::sha256_hex_digest(),
            resource_cache_usage_report_function: None,

            default_exclude_links: LinkExclusion::None,
        }
    }

    /// 注入结构化日志句柄，弃用告警与引导期变更记录经由它输出。
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = Some(logger);
    }

    // ---------------------------------------------------------------
    // 格式化器解析
    // ---------------------------------------------------------------

    /// 当前键格式标签。
    pub fn key_format(&self) -> &str {
        &self.key_format
    }

    /// 设置键格式标签。
    ///
    /// 不做写入期校验；未登记的标签在解析时失败。本次变更使所有线程缓存的
    /// 键格式化器在下一次查找时失效。
    pub fn set_key_format(&mut self, format: impl Into<Cow<'static, str>>) {
        self.key_format = format.into();
        let generation = self.key_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.log_setting_update(
            "key_format",
            &[(configuration_fields::FIELD_GENERATION, generation)],
        );
    }

    /// 当前路由格式标签。
    pub fn route_format(&self) -> &str {
        &self.route_format
    }

    /// 设置路由格式标签；失效语义与 [`set_key_format`](Self::set_key_format) 相同，槽位相互独立。
    pub fn set_route_format(&mut self, format: impl Into<Cow<'static, str>>) {
        self.route_format = format.into();
        let generation = self.route_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.log_setting_update(
            "route_format",
            &[(configuration_fields::FIELD_GENERATION, generation)],
        );
    }

    /// 是否启用格式化器的线程本地缓存。
    pub fn cache_formatters(&self) -> bool {
        self.cache_formatters
    }

    /// 开关格式化器缓存。
    ///
    /// 无论开或关，两个槽位的代次都会自增：关闭时让各线程及时释放旧实例，
    /// 开启时确保不会复用关断前缓存的陈旧实例。
    pub fn set_cache_formatters(&mut self, cache: bool) {
        self.cache_formatters = cache;
        let key_generation = self.key_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let route_generation = self.route_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.log_setting_update(
            "cache_formatters",
            &[
                (configuration_fields::FIELD_KEY_GENERATION, key_generation),
                (configuration_fields::FIELD_ROUTE_GENERATION, route_generation),
            ],
        );
    }

    /// 解析键格式化器。
    ///
    /// # 执行逻辑（How）
    /// 1. 缓存关闭：每次经由注册表构造全新未装饰实例，绝不入槽；
    /// 2. 缓存开启：读取共享代次，查询本线程槽位；代次一致即命中返回；
    ///    未命中则解析、包上记忆化装饰器、连同代次入槽后返回。
    ///
    /// # 失败语义
    /// - 未登记的格式标签返回 [`ConfigError::UnknownFormatter`]；失败不产生
    ///   任何缓存状态。
    pub fn resolve_key_formatter(&self) -> Result<Rc<dyn Formatter>, ConfigError> {
        self.resolve_formatter(FormatterSlot::Key, &self.key_format, &self.key_generation)
    }

    /// 解析路由格式化器；协议与键格式化器一致，槽位与代次独立。
    pub fn resolve_route_formatter(&self) -> Result<Rc<dyn Formatter>, ConfigError> {
        self.resolve_formatter(
            FormatterSlot::Route,
            &self.route_format,
            &self.route_generation,
        )
    }

    fn resolve_formatter(
        &self,
        slot: FormatterSlot,
        tag: &str,
        generation: &AtomicU64,
    ) -> Result<Rc<dyn Formatter>, ConfigError> {
        if !self.cache_formatters {
            return self.formatters.resolve(tag);
        }

        let current = generation.load(Ordering::SeqCst);
        if let Some(hit) = cache::lookup(self.store_id, slot, current) {
            return Ok(hit);
        }

        let fresh = self.formatters.resolve(tag)?;
        let memoized: Rc<dyn Formatter> = Rc::new(MemoizedFormatter::new(fresh));
        cache::install(self.store_id, slot, current, Rc::clone(&memoized));
        Ok(memoized)
    }

    // ---------------------------------------------------------------
    // 异常放行策略
    // ---------------------------------------------------------------

    /// 当前异常放行名单。
    pub fn exception_allowlist(&self) -> &[Cow<'static, str>] {
        &self.exception_allowlist
    }

    /// 设置异常放行名单（类型名集合）。
    pub fn set_exception_allowlist(
        &mut self,
        allowlist: impl IntoIterator<Item = Cow<'static, str>>,
    ) {
        self.exception_allowlist = allowlist.into_iter().collect();
        self.log_setting_update("exception_allowlist", &[]);
    }

    /// 是否放行全部异常。
    pub fn allow_all_exceptions(&self) -> bool {
        self.allow_all_exceptions
    }

    /// 设置“放行全部异常”开关；为真时短路放行名单。
    pub fn set_allow_all_exceptions(&mut self, allow: bool) {
        self.allow_all_exceptions = allow;
        self.log_setting_update("allow_all_exceptions", &[]);
    }

    /// 判断异常是否被放行（绕过集中式错误转换）。
    ///
    /// # 执行逻辑（How）
    /// - `allow_all_exceptions` 为真直接放行；
    /// - 否则取错误的有序祖先名链，与放行名单做非空交集判定——名单中的名称
    ///   既匹配具体类型也匹配任一祖先（子类型随之放行）。
    ///
    /// # 契约（What）
    /// - 纯谓词：永不失败，不修改任何状态；放行与否的后续处置由外部错误
    ///   救援层决定。
    pub fn exception_allowed(&self, error: &dyn ExceptionAncestry) -> bool {
        if self.allow_all_exceptions {
            return true;
        }
        error.ancestors().iter().any(|ancestor| {
            self.exception_allowlist
                .iter()
                .any(|allowed| allowed.as_ref() == *ancestor)
        })
    }

    // ---------------------------------------------------------------
    // 处理器解析
    // ---------------------------------------------------------------

    /// 当前默认处理器名称。
    pub fn default_processor_name(&self) -> &str {
        &self.default_processor_name
    }

    /// 设置默认处理器名称并重置解析备忘录。
    pub fn set_default_processor_name(&mut self, name: impl Into<Cow<'static, str>>) {
        self.default_processor_name = name.into();
        *self.default_processor_memo.lock() = None;
        self.log_setting_update("default_processor_name", &[]);
    }

    /// 解析默认处理器（惰性 + 备忘录缓存）。
    ///
    /// # 失败语义
    /// - 名称未登记时返回 [`ConfigError::UnknownProcessor`]；失败不写入
    ///   备忘录，修正后的下一次调用重新查找。
    pub fn default_processor(&self) -> Result<Arc<dyn Processor>, ConfigError> {
        let mut memo = self.default_processor_memo.lock();
        if let Some(processor) = memo.as_ref() {
            return Ok(Arc::clone(processor));
        }
        let resolved = self.processors.resolve(&self.default_processor_name)?;
        *memo = Some(Arc::clone(&resolved));
        Ok(resolved)
    }

    // ---------------------------------------------------------------
    // 兼容写入口（弃用）
    // ---------------------------------------------------------------

    /// 一次性设置两个 include 开关的旧入口。
    #[deprecated(
        since = "0.1.0",
        note = "改用 set_default_allow_include_to_one 与 set_default_allow_include_to_many"
    )]
    pub fn set_allow_include(&mut self, allow: bool) {
        deprecation::LEGACY_ALLOW_INCLUDE.emit(self.logger.as_deref());
        self.default_allow_include_to_one = allow;
        self.default_allow_include_to_many = allow;
    }

    /// `allow_all_exceptions` 的旧名入口。
    #[deprecated(since = "0.1.0", note = "改用 set_allow_all_exceptions")]
    pub fn set_whitelist_all_exceptions(&mut self, allow: bool) {
        deprecation::LEGACY_WHITELIST_ALL_EXCEPTIONS.emit(self.logger.as_deref());
        self.allow_all_exceptions = allow;
    }

    /// `exception_allowlist` 的旧名入口。
    #[deprecated(since = "0.1.0", note = "改用 set_exception_allowlist")]
    pub fn set_exception_class_whitelist(
        &mut self,
        allowlist: impl IntoIterator<Item = Cow<'static, str>>,
    ) {
        deprecation::LEGACY_EXCEPTION_CLASS_WHITELIST.emit(self.logger.as_deref());
        self.exception_allowlist = allowlist.into_iter().collect();
    }

    /// 直接安装处理器实例的旧入口，绕过注册表。
    #[deprecated(
        since = "0.1.0",
        note = "改用 set_default_processor_name 并在处理器注册表登记工厂"
    )]
    pub fn set_default_processor_instance(&mut self, processor: Arc<dyn Processor>) {
        deprecation::LEGACY_PROCESSOR_INSTANCE.emit(self.logger.as_deref());
        *self.default_processor_memo.lock() = Some(processor);
    }

    // ---------------------------------------------------------------
    // 标量设置（last write wins，无相互作用不变式）
    // ---------------------------------------------------------------

    /// 资源主键语义类型。
    pub fn resource_key_type(&self) -> &ResourceKeyType {
        &self.resource_key_type
    }

    /// 设置资源主键语义类型。
    pub fn set_resource_key_type(&mut self, key_type: ResourceKeyType) {
        self.resource_key_type = key_type;
    }

    pub fn default_allow_include_to_one(&self) -> bool {
        self.default_allow_include_to_one
    }

    pub fn set_default_allow_include_to_one(&mut self, allow: bool) {
        self.default_allow_include_to_one = allow;
    }

    pub fn default_allow_include_to_many(&self) -> bool {
        self.default_allow_include_to_many
    }

    pub fn set_default_allow_include_to_many(&mut self, allow: bool) {
        self.default_allow_include_to_many = allow;
    }

    pub fn allow_sort(&self) -> bool {
        self.allow_sort
    }

    pub fn set_allow_sort(&mut self, allow: bool) {
        self.allow_sort = allow;
    }

    pub fn allow_filter(&self) -> bool {
        self.allow_filter
    }

    pub fn set_allow_filter(&mut self, allow: bool) {
        self.allow_filter = allow;
    }

    pub fn raise_if_parameters_not_allowed(&self) -> bool {
        self.raise_if_parameters_not_allowed
    }

    pub fn set_raise_if_parameters_not_allowed(&mut self, raise: bool) {
        self.raise_if_parameters_not_allowed = raise;
    }

    pub fn warn_on_route_setup_issues(&self) -> bool {
        self.warn_on_route_setup_issues
    }

    pub fn set_warn_on_route_setup_issues(&mut self, warn: bool) {
        self.warn_on_route_setup_issues = warn;
    }

    pub fn warn_on_missing_routes(&self) -> bool {
        self.warn_on_missing_routes
    }

    pub fn set_warn_on_missing_routes(&mut self, warn: bool) {
        self.warn_on_missing_routes = warn;
    }

    pub fn warn_on_performance_issues(&self) -> bool {
        self.warn_on_performance_issues
    }

    pub fn set_warn_on_performance_issues(&mut self, warn: bool) {
        self.warn_on_performance_issues = warn;
    }

    pub fn default_paginator(&self) -> &DefaultPaginator {
        &self.default_paginator
    }

    pub fn set_default_paginator(&mut self, paginator: DefaultPaginator) {
        self.default_paginator = paginator;
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn set_default_page_size(&mut self, size: u32) {
        self.default_page_size = size;
    }

    pub fn maximum_page_size(&self) -> u32 {
        self.maximum_page_size
    }

    pub fn set_maximum_page_size(&mut self, size: u32) {
        self.maximum_page_size = size;
    }

    pub fn top_level_links_include_pagination(&self) -> bool {
        self.top_level_links_include_pagination
    }

    pub fn set_top_level_links_include_pagination(&mut self, include: bool) {
        self.top_level_links_include_pagination = include;
    }

    pub fn top_level_meta_include_record_count(&self) -> bool {
        self.top_level_meta_include_record_count
    }

    pub fn set_top_level_meta_include_record_count(&mut self, include: bool) {
        self.top_level_meta_include_record_count = include;
    }

    pub fn top_level_meta_record_count_key(&self) -> &str {
        &self.top_level_meta_record_count_key
    }

    pub fn set_top_level_meta_record_count_key(&mut self, key: impl Into<Cow<'static, str>>) {
        self.top_level_meta_record_count_key = key.into();
    }

    pub fn top_level_meta_include_page_count(&self) -> bool {
        self.top_level_meta_include_page_count
    }

    pub fn set_top_level_meta_include_page_count(&mut self, include: bool) {
        self.top_level_meta_include_page_count = include;
    }

    pub fn top_level_meta_page_count_key(&self) -> &str {
        &self.top_level_meta_page_count_key
    }

    pub fn set_top_level_meta_page_count_key(&mut self, key: impl Into<Cow<'static, str>>) {
        self.top_level_meta_page_count_key = key.into();
    }

    pub fn use_text_errors(&self) -> bool {
        self.use_text_errors
    }

    pub fn set_use_text_errors(&mut self, use_text: bool) {
        self.use_text_errors = use_text;
    }

    pub fn include_backtraces_in_errors(&self) -> bool {
        self.include_backtraces_in_errors
    }

    pub fn set_include_backtraces_in_errors(&mut self, include: bool) {
        self.include_backtraces_in_errors = include;
    }

    pub fn include_application_backtraces_in_errors(&self) -> bool {
        self.include_application_backtraces_in_errors
    }

    pub fn set_include_application_backtraces_in_errors(&mut self, include: bool) {
        self.include_application_backtraces_in_errors = include;
    }

    pub fn always_include_to_one_linkage_data(&self) -> bool {
        self.always_include_to_one_linkage_data
    }

    pub fn set_always_include_to_one_linkage_data(&mut self, include: bool) {
        self.always_include_to_one_linkage_data = include;
    }

    pub fn always_include_to_many_linkage_data(&self) -> bool {
        self.always_include_to_many_linkage_data
    }

    pub fn set_always_include_to_many_linkage_data(&mut self, include: bool) {
        self.always_include_to_many_linkage_data = include;
    }

    pub fn allow_transactions(&self) -> bool {
        self.allow_transactions
    }

    pub fn set_allow_transactions(&mut self, allow: bool) {
        self.allow_transactions = allow;
    }

    pub fn use_relationship_reflection(&self) -> bool {
        self.use_relationship_reflection
    }

    pub fn set_use_relationship_reflection(&mut self, reflect: bool) {
        self.use_relationship_reflection = reflect;
    }

    /// 当前资源缓存后端句柄；`None`（默认值）表示资源级缓存整体停用。
    pub fn resource_cache(&self) -> Option<&Arc<dyn ResourceCache>> {
        self.resource_cache.as_ref()
    }

    /// 安装或卸下资源缓存后端。摘要函数、缓存字段等 sibling 设置仅在句柄
    /// 存在时生效。
    pub fn set_resource_cache(&mut self, cache: Option<Arc<dyn ResourceCache>>) {
        self.resource_cache = cache;
    }

    pub fn default_caching(&self) -> bool {
        self.default_caching
    }

    pub fn set_default_caching(&mut self, caching: bool) {
        self.default_caching = caching;
    }

    pub fn default_resource_cache_field(&self) -> &str {
        &self.default_resource_cache_field
    }

    pub fn set_default_resource_cache_field(&mut self, field: impl Into<Cow<'static, str>>) {
        self.default_resource_cache_field = field.into();
    }

    /// 资源缓存摘要函数（默认 SHA-256 十六进制）。
    pub fn resource_cache_digest_function(&self) -> &CacheDigestFn {
        &self.resource_cache_digest_function
    }

    pub fn set_resource_cache_digest_function(&mut self, digest: CacheDigestFn) {
        self.resource_cache_digest_function = digest;
    }

    /// 资源缓存使用率上报函数；`None` 表示不上报。
    pub fn resource_cache_usage_report_function(&self) -> Option<&CacheUsageReportFn> {
        self.resource_cache_usage_report_function.as_ref()
    }

    pub fn set_resource_cache_usage_report_function(
        &mut self,
        report: Option<CacheUsageReportFn>,
    ) {
        self.resource_cache_usage_report_function = report;
    }

    pub fn default_exclude_links(&self) -> &LinkExclusion {
        &self.default_exclude_links
    }

    pub fn set_default_exclude_links(&mut self, exclusion: LinkExclusion) {
        self.default_exclude_links = exclusion;
    }

    // ---------------------------------------------------------------
    // 快照
    // ---------------------------------------------------------------

    /// 生成当前标量设置的机读快照，供审计与运维留档。
    pub fn snapshot(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            key_format: self.key_format.to_string(),
            route_format: self.route_format.to_string(),
            cache_formatters: self.cache_formatters,
            exception_allowlist: self
                .exception_allowlist
                .iter()
                .map(|name| name.to_string())
                .collect(),
            allow_all_exceptions: self.allow_all_exceptions,
            resource_key_type: self.resource_key_type.as_str().to_owned(),
            default_allow_include_to_one: self.default_allow_include_to_one,
            default_allow_include_to_many: self.default_allow_include_to_many,
            allow_sort: self.allow_sort,
            allow_filter: self.allow_filter,
            raise_if_parameters_not_allowed: self.raise_if_parameters_not_allowed,
            warn_on_route_setup_issues: self.warn_on_route_setup_issues,
            warn_on_missing_routes: self.warn_on_missing_routes,
            warn_on_performance_issues: self.warn_on_performance_issues,
            default_paginator: self.default_paginator.as_str().to_owned(),
            default_page_size: self.default_page_size,
            maximum_page_size: self.maximum_page_size,
            top_level_links_include_pagination: self.top_level_links_include_pagination,
            top_level_meta_include_record_count: self.top_level_meta_include_record_count,
            top_level_meta_record_count_key: self.top_level_meta_record_count_key.to_string(),
            top_level_meta_include_page_count: self.top_level_meta_include_page_count,
            top_level_meta_page_count_key: self.top_level_meta_page_count_key.to_string(),
            use_text_errors: self.use_text_errors,
            include_backtraces_in_errors: self.include_backtraces_in_errors,
            include_application_backtraces_in_errors: self
                .include_application_backtraces_in_errors,
            always_include_to_one_linkage_data: self.always_include_to_one_linkage_data,
            always_include_to_many_linkage_data: self.always_include_to_many_linkage_data,
            allow_transactions: self.allow_transactions,
            use_relationship_reflection: self.use_relationship_reflection,
            default_processor_name: self.default_processor_name.to_string(),
            resource_cache: self
                .resource_cache
                .as_ref()
                .map(|store| store.name().to_owned()),
            default_caching: self.default_caching,
            default_resource_cache_field: self.default_resource_cache_field.to_string(),
            default_exclude_links: self
                .default_exclude_links
                .excluded_names()
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
        }
    }

    /// 记录一次引导期设置变更。
    ///
    /// 记录范围限定为参与跨线程协议的设置：缓存影响 setter 附带变更后的
    /// 槽位代次，放行策略与处理器名称变更只记录设置名；纯展示标量不记录。
    fn log_setting_update(&self, setting: &'static str, generations: &[(&'static str, u64)]) {
        let Some(logger) = self.logger.as_deref() else {
            return;
        };
        let mut fields = OwnedAttributeSet::new();
        fields.push_owned(configuration_fields::FIELD_SETTING, setting);
        for (field, generation) in generations {
            fields.push_owned(*field, *generation);
        }
        logger.log(&LogRecord {
            severity: LogSeverity::Debug,
            message: "configuration.setting updated",
            attributes: fields.as_slice(),
        });
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
