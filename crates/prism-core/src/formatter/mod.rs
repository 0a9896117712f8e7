//! 格式化策略契约：外部 JSON 键/路由命名与内部标识符命名之间的转换。
//!
//! # 设计缘起（Why）
//! - JSON:API 文档的键与路由片段通常使用 dash-case 或 lowerCamelCase，而内部
//!   标识符使用 snake_case；两者之间的转换由可插拔的“格式化策略”承担。
//! - 配置存储只负责策略的选择与缓存，不实现任何转换逻辑；本模块即其依赖的
//!   “策略提供方”契约与内建实现。
//!
//! # 总体结构（How）
//! - [`Formatter`]：无状态策略契约，`format` 输出外部命名，`unformat` 还原
//!   内部命名；
//! - [`builtin`] 中的三个内建策略（underscored / camelized / dasherized）；
//! - [`MemoizedFormatter`]：按线程持有的记忆化装饰器，缓存字符串转换结果；
//! - [`FormatterRegistry`]：格式标签到工厂的显式注册表，未登记的标签在查找
//!   时以命名错误失败。
//!
//! # 契约约束（What）
//! - 策略实现必须无状态（或仅含只读状态）：同一输入永远产生同一输出，这是
//!   记忆化装饰器正确性的前提；
//! - 策略实例按线程持有（`Rc`），不要求 `Send`/`Sync`；跨线程共享的是注册表
//!   与工厂，而非策略实例。

mod builtin;
mod memo;
mod registry;

pub use builtin::{CamelizedFormatter, DasherizedFormatter, UnderscoredFormatter};
pub use memo::MemoizedFormatter;
pub use registry::{FormatterFactory, FormatterRegistry, TypedFormatterFactory};

/// 内建格式标签常量，供引导代码与测试统一引用。
pub mod tags {
    /// snake_case 键与路由。
    pub const UNDERSCORED: &str = "underscored";

    /// lowerCamelCase 键与路由。
    pub const CAMELIZED: &str = "camelized";

    /// dash-case 键与路由（默认值）。
    pub const DASHERIZED: &str = "dasherized";
}

/// 命名转换策略契约。
///
/// # 教案式说明
/// - **意图 (Why)**：把“外部命名风格”收敛为一个最小接口，配置存储据此完成
///   策略选择、装饰与缓存，而无需理解任何转换细节。
/// - **契约 (What)**：
///   - `format`：内部标识符（约定 snake_case）转为外部命名；
///   - `unformat`：外部命名还原为内部标识符；
///   - 两个方法都必须是纯函数：无副作用、输入相同则输出相同。
/// - **设计权衡 (Trade-offs)**：接口按值返回 `String` 而非写入缓冲区，牺牲
///   少量分配换取实现简洁；热路径的重复转换由记忆化装饰器吸收。
pub trait Formatter: std::fmt::Debug {
    /// 将内部标识符转换为外部命名。
    fn format(&self, value: &str) -> String;

    /// 将外部命名还原为内部标识符。
    fn unformat(&self, value: &str) -> String;
}
