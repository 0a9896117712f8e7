//! 配置项的枚举与可调用类型定义。
//!
//! 以强类型枚举取代自由字符串设置，保留 `Custom` 变体承接宿主扩展；
//! 可调用设置以 `Arc<dyn Fn …>` 形态存储，便于跨线程共享。

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::sealed::Sealed;

/// 资源主键的语义类型。
///
/// ## 契约说明（What）
/// - `Integer` / `Uuid` / `Text`：内建语义，序列化层据此解析与渲染主键；
/// - `Custom`：宿主定义的语义名，由上层自行解释。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceKeyType {
    Integer,
    Uuid,
    Text,
    Custom(Cow<'static, str>),
}

impl ResourceKeyType {
    /// 返回键类型的稳定字符串描述。
    pub fn as_str(&self) -> &str {
        match self {
            Self::Integer => "integer",
            Self::Uuid => "uuid",
            Self::Text => "text",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ResourceKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 默认分页器策略。
///
/// `None` 表示不分页；`Custom` 承接宿主注册的分页器名称。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultPaginator {
    None,
    Offset,
    Paged,
    Custom(Cow<'static, str>),
}

impl DefaultPaginator {
    /// 返回分页器的稳定字符串描述。
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Offset => "offset",
            Self::Paged => "paged",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for DefaultPaginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 可被排除的文档链接种类。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// 资源与关系上的 `self` 链接。
    SelfLink,
    /// 关系上的 `related` 链接。
    Related,
}

impl LinkKind {
    /// 返回链接种类的稳定字符串描述。
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLink => "self",
            Self::Related => "related",
        }
    }
}

/// 全局链接排除策略。
///
/// ## 契约说明（What）
/// - `None`：不排除任何链接（默认值）；
/// - `Default`：排除全部默认链接（`self` 与 `related`）；
/// - `Only`：仅排除列出的链接种类。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkExclusion {
    None,
    Default,
    Only(Vec<LinkKind>),
}

impl LinkExclusion {
    /// 判断指定链接种类是否被排除。
    pub fn excludes(&self, kind: LinkKind) -> bool {
        match self {
            Self::None => false,
            Self::Default => true,
            Self::Only(kinds) => kinds.contains(&kind),
        }
    }

    /// 返回被排除链接的名称列表，供快照与日志使用。
    pub fn excluded_names(&self) -> Vec<&'static str> {
        match self {
            Self::None => Vec::new(),
            Self::Default => vec![LinkKind::SelfLink.as_str(), LinkKind::Related.as_str()],
            Self::Only(kinds) => kinds.iter().map(|kind| kind.as_str()).collect(),
        }
    }
}

/// 资源缓存后端契约。
///
/// # 教案式说明
/// - **意图 (Why)**：配置存储只负责持有宿主注入的缓存后端句柄并向序列化层
///   转交，不理解任何读写协议；具体的片段读写接口由上层 crate 扩展本契约
///   定义，与 [`Processor`](crate::processor::Processor) 的缝隙划分一致。
/// - **契约 (What)**：`name` 返回后端的稳定标识（如 `"memory"`、`"redis"`），
///   供快照与日志使用；实现必须 `Send + Sync`，句柄以 `Arc` 跨线程共享。
pub trait ResourceCache: Send + Sync + Sealed {
    /// 返回缓存后端的稳定名称。
    fn name(&self) -> &str;
}

/// 资源缓存摘要函数：输入缓存字段值，返回低碰撞摘要。
pub type CacheDigestFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// 资源缓存使用率上报函数：`(资源名, 命中数, 未命中数)`。
pub type CacheUsageReportFn = Arc<dyn Fn(&str, u64, u64) + Send + Sync>;

/// 默认摘要函数：SHA-256 十六进制编码。
pub(crate) fn sha256_hex_digest() -> CacheDigestFn {
    Arc::new(|input: &str| hex::encode(Sha256::digest(input.as_bytes())))
}
