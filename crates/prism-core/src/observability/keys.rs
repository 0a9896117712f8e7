//! 可观测性键名契约：统一日志字段键名的单一事实来源。
//!
//! 契约定义（What）：各子模块提供只读常量，日志与告警平台据此解析字段，
//! 避免键名在调用点间漂移。
//! 维护提示：新增字段时先在此登记，再在调用点引用；禁止在调用点内联字符串。

/// logging 键名分组。
pub mod logging {
    /// 弃用公告日志字段。
    ///
    /// 统一的弃用告警字段集合，便于告警平台解析。
    pub mod deprecation {
        /// 被弃用的符号或能力标识。
        pub const FIELD_SYMBOL: &str = "deprecation.symbol";

        /// 自哪个版本开始弃用。
        pub const FIELD_SINCE: &str = "deprecation.since";

        /// 计划移除的版本。
        pub const FIELD_REMOVAL: &str = "deprecation.removal";

        /// 替代方案提示。
        pub const FIELD_REPLACEMENT: &str = "deprecation.replacement";
    }

    /// 配置存储日志字段。
    ///
    /// 引导期设置变更的结构化字段。
    pub mod configuration {
        /// 被修改的设置项名称。
        pub const FIELD_SETTING: &str = "configuration.setting";

        /// 变更后的缓存代次（generation token），单槽位变更使用。
        pub const FIELD_GENERATION: &str = "configuration.generation";

        /// 变更后的键槽位代次，同时波及两个槽位的变更使用。
        pub const FIELD_KEY_GENERATION: &str = "configuration.key_generation";

        /// 变更后的路由槽位代次，同时波及两个槽位的变更使用。
        pub const FIELD_ROUTE_GENERATION: &str = "configuration.route_generation";
    }
}
