//! 按线程持有的记忆化装饰器。
//!
//! # 设计背景（Why）
//! - 键与路由的命名转换在请求处理路径上高频出现，且输入集合（资源字段名）
//!   高度重复；对纯函数策略做字符串级记忆化可以把重复转换摊销为一次查表。
//! - 装饰器实例由配置存储放入线程本地槽位，整个生命周期都被单线程独占，
//!   因此用 `RefCell` 提供内部可变性即可，无需任何锁。
//!
//! # 契约说明（What）
//! - 仅当被装饰策略是纯函数时缓存才正确；这是 [`Formatter`] 契约的一部分；
//! - `format` 与 `unformat` 各自维护独立备忘录，互不影响；
//! - 类型不是 `Sync`：禁止跨线程共享，线程本地槽位是唯一合法归宿。
//!
//! # 风险提示（Trade-offs）
//! - 备忘录不设容量上限。字段名集合由资源 schema 决定，基数有限；若宿主把
//!   用户输入直接喂给格式化器，需在上层自行限流。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Formatter;

/// 缓存命名转换结果的装饰器。
#[derive(Debug)]
pub struct MemoizedFormatter {
    inner: Rc<dyn Formatter>,
    format_memo: RefCell<HashMap<String, String>>,
    unformat_memo: RefCell<HashMap<String, String>>,
}

impl MemoizedFormatter {
    /// 包装一个策略实例。
    pub fn new(inner: Rc<dyn Formatter>) -> Self {
        Self {
            inner,
            format_memo: RefCell::new(HashMap::new()),
            unformat_memo: RefCell::new(HashMap::new()),
        }
    }

    /// 返回当前缓存的转换条目数，供测试与容量观测使用。
    pub fn memo_len(&self) -> usize {
        self.format_memo.borrow().len() + self.unformat_memo.borrow().len()
    }
}

impl Formatter for MemoizedFormatter {
    fn format(&self, value: &str) -> String {
        if let Some(hit) = self.format_memo.borrow().get(value) {
            return hit.clone();
        }
        let computed = self.inner.format(value);
        self.format_memo
            .borrow_mut()
            .insert(value.to_owned(), computed.clone());
        computed
    }

    fn unformat(&self, value: &str) -> String {
        if let Some(hit) = self.unformat_memo.borrow().get(value) {
            return hit.clone();
        }
        let computed = self.inner.unformat(value);
        self.unformat_memo
            .borrow_mut()
            .insert(value.to_owned(), computed.clone());
        computed
    }
}
