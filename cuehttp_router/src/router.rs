//! 路由表与分发
//!
//! method+prefix+path 精确匹配的路由表，以及与外层管道通过
//! 哨兵状态码协作的分发入口。

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use cuehttp_config::RouterConfig;

use crate::context::Context;
use crate::middleware::{compose, Chain, Composed, Handler};

/// 外层管道约定的"未处理"哨兵状态码默认值
pub const UNHANDLED_STATUS: u16 = 404;

/// 重定向的默认状态码
const DEFAULT_REDIRECT_STATUS: u16 = 301;

/// 请求方法
///
/// 路由器支持的固定方法集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// DEL
    Del,
    /// GET
    Get,
    /// HEAD
    Head,
    /// POST
    Post,
    /// PUT
    Put,
}

impl Method {
    /// 固定方法集合
    pub const ALL: [Method; 5] = [
        Method::Del,
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
    ];

    /// 方法的字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Del => "DEL",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 构造路由键
fn route_key(method: &str, prefix: &str, path: &str) -> String {
    format!("{}+{}{}", method, prefix, path)
}

/// 路由构建器
///
/// 构建阶段可变：注册路由、设置前缀和哨兵状态码。通过
/// [`Router::routes`] 消耗构建器，冻结为服务阶段的 [`Routes`]。
pub struct Router<C> {
    /// 路由前缀
    prefix: String,
    /// 未处理哨兵状态码
    unhandled_status: u16,
    /// 路由表
    table: HashMap<String, Composed<C>>,
}

impl<C: Context + 'static> Router<C> {
    /// 创建新路由器
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            unhandled_status: UNHANDLED_STATUS,
            table: HashMap::new(),
        }
    }

    /// 创建带前缀的路由器
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let mut router = Self::new();
        router.prefix = prefix.into();
        router
    }

    /// 从配置创建路由器
    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            unhandled_status: config.unhandled_status,
            table: HashMap::new(),
        }
    }

    /// 设置路由前缀
    ///
    /// 只影响之后注册的路由和冻结后的查找，已注册的键不变。
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// 设置未处理哨兵状态码
    pub fn unhandled_status(&mut self, status: u16) -> &mut Self {
        self.unhandled_status = status;
        self
    }

    /// 注册 DEL 路由
    pub fn del(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        self.register(Method::Del, path, compose(handlers.into()));
        self
    }

    /// 注册 GET 路由
    pub fn get(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        self.register(Method::Get, path, compose(handlers.into()));
        self
    }

    /// 注册 HEAD 路由
    pub fn head(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        self.register(Method::Head, path, compose(handlers.into()));
        self
    }

    /// 注册 POST 路由
    pub fn post(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        self.register(Method::Post, path, compose(handlers.into()));
        self
    }

    /// 注册 PUT 路由
    pub fn put(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        self.register(Method::Put, path, compose(handlers.into()));
        self
    }

    /// 在固定方法集合的每个方法下注册同一条链
    pub fn all(&mut self, path: &str, handlers: impl Into<Chain<C>>) -> &mut Self {
        let composed = compose(handlers.into());
        for method in Method::ALL {
            self.register(method, path, composed.clone());
        }
        self
    }

    /// 注册重定向路由
    ///
    /// 在固定方法集合的每个方法下注册一个处理器：设置重定向目标，
    /// 然后将状态码置为 301。
    pub fn redirect(&mut self, path: &str, target: impl Into<String>) -> &mut Self {
        self.redirect_with_status(path, target, DEFAULT_REDIRECT_STATUS)
    }

    /// 注册带自定义状态码的重定向路由
    pub fn redirect_with_status(
        &mut self,
        path: &str,
        target: impl Into<String>,
        status: u16,
    ) -> &mut Self {
        let target = target.into();
        self.all(
            path,
            Handler::from_fn_without_next(move |ctx: &mut C| {
                ctx.redirect(target.clone());
                ctx.set_status(status);
            }),
        )
    }

    /// 冻结为只读路由表
    ///
    /// 消耗构建器，之后不再能注册路由。
    pub fn routes(self) -> Routes<C> {
        Routes {
            prefix: self.prefix,
            unhandled_status: self.unhandled_status,
            table: self.table,
        }
    }

    /// 插入路由表项
    ///
    /// 同一路由键只保留最先注册的处理器，后续注册被丢弃。
    fn register(&mut self, method: Method, path: &str, handler: Composed<C>) {
        let key = route_key(method.as_str(), &self.prefix, path);
        match self.table.entry(key) {
            Entry::Vacant(entry) => {
                tracing::debug!(method = method.as_str(), path, "注册路由");
                entry.insert(handler);
            }
            Entry::Occupied(entry) => {
                tracing::warn!(key = entry.key().as_str(), "路由键重复，保留先注册的处理器");
            }
        }
    }
}

impl<C: Context + 'static> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// 冻结路由表
///
/// 服务阶段只读，可自由共享；分发在调用线程上同步执行。
pub struct Routes<C> {
    prefix: String,
    unhandled_status: u16,
    table: HashMap<String, Composed<C>>,
}

impl<C: Context + 'static> Routes<C> {
    /// 分发一次请求
    ///
    /// 上下文状态码不是哨兵值时直接返回，不产生任何副作用。
    /// 精确匹配命中时执行组合处理器；未命中时保持上下文不变，
    /// 哨兵状态留给外层管道报告。
    pub fn dispatch(&self, ctx: &mut C) {
        if ctx.status() != self.unhandled_status {
            return;
        }
        let key = route_key(ctx.method(), &self.prefix, ctx.path());
        match self.table.get(&key) {
            Some(handler) => {
                tracing::trace!(key = key.as_str(), "路由命中");
                handler.call(ctx);
            }
            None => {
                tracing::trace!(key = key.as_str(), "路由未命中");
            }
        }
    }

    /// 路由表项数量
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// 路由表是否为空
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 转换为可安装到外层管道的单一函数
    pub fn into_fn(self) -> impl Fn(&mut C) + Send + Sync {
        move |ctx: &mut C| self.dispatch(ctx)
    }
}
