//! 配置存储内部的线程本地格式化器槽位。
//!
//! # 设计背景（Why）
//! - **跨线程失效难题**：格式化器实例按线程缓存（`Rc` + 记忆化装饰器不可跨
//!   线程共享），但是设置变更发生在任意线程；变更线程无法触达其它线程的
//!   存储。本模块采用“代次栅栏”协议：每个槽位把实例与其构建时的代次一起
//!   存放，读取方先比较本地代次与配置存储上的共享计数器（`AtomicU64`），
//!   不一致即视为陈旧并重新解析。
//! - **多存储共存**：测试与多租户宿主会在同一线程上创建多个配置存储，槽位
//!   以“存储 id + 槽位种类”为键区分，互不串扰。
//!
//! # 契约说明（What）
//! - 槽位由其所属线程独占读写；跨线程唯一共享的是代次计数器本身；
//! - [`lookup`] 命中陈旧代次时顺手移除条目，让旧实例在本线程及时释放；
//! - 键槽与路由槽相互独立，单独失效。
//!
//! # 风险与考量（Trade-offs）
//! - 配置存储被丢弃后，其它线程残留的槽位条目不会主动回收（每线程至多两个
//!   格式化器实例）。配置存储的预期用法是进程级单例，该泄漏上界可接受；
//!   若宿主频繁建弃存储，应复用注册表并避免开启格式化器缓存。
//! - 代次读取使用 `SeqCst`，牺牲极少性能换取跨线程时序易于推理，与热更新
//!   栅栏的通行做法保持一致。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::formatter::Formatter;

/// 槽位种类：键格式化器与路由格式化器各占一个独立槽位。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum FormatterSlot {
    Key,
    Route,
}

struct CachedEntry {
    generation: u64,
    formatter: Rc<dyn Formatter>,
}

thread_local! {
    static FORMATTER_SLOTS: RefCell<HashMap<(u64, FormatterSlot), CachedEntry>> =
        RefCell::new(HashMap::new());
}

static STORE_IDS: AtomicU64 = AtomicU64::new(0);

/// 为新建的配置存储分配进程内唯一 id。
pub(crate) fn next_store_id() -> u64 {
    STORE_IDS.fetch_add(1, Ordering::Relaxed)
}

/// 查询当前线程的槽位；仅当缓存代次与 `generation` 一致时命中。
///
/// 代次不一致的条目被立即移除，调用方随后重新解析并 [`install`]。
pub(crate) fn lookup(
    store: u64,
    slot: FormatterSlot,
    generation: u64,
) -> Option<Rc<dyn Formatter>> {
    FORMATTER_SLOTS.with(|slots| {
        let mut slots = slots.borrow_mut();
        match slots.get(&(store, slot)) {
            Some(entry) if entry.generation == generation => Some(Rc::clone(&entry.formatter)),
            Some(_) => {
                slots.remove(&(store, slot));
                None
            }
            None => None,
        }
    })
}

/// 把新解析的实例连同其代次写入当前线程的槽位。
pub(crate) fn install(
    store: u64,
    slot: FormatterSlot,
    generation: u64,
    formatter: Rc<dyn Formatter>,
) {
    FORMATTER_SLOTS.with(|slots| {
        slots.borrow_mut().insert(
            (store, slot),
            CachedEntry {
                generation,
                formatter,
            },
        );
    });
}

#[cfg(test)]
pub(crate) fn occupied_slots_for(store: u64) -> usize {
    FORMATTER_SLOTS.with(|slots| {
        slots
            .borrow()
            .keys()
            .filter(|(owner, _)| *owner == store)
            .count()
    })
}
