//! cuehttp 路由和中间件系统
//!
//! 提供 method+path 精确匹配路由和洋葱模型中间件链。

pub mod context;
pub mod middleware;
pub mod router;

// 导出主要类型到 crate root
pub use crate::context::Context;
pub use crate::middleware::{compose, Chain, Composed, Handler, Next};
pub use crate::router::{Method, Router, Routes, UNHANDLED_STATUS};

// 预导出
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::middleware::{compose, Chain, Composed, Handler, Next};
    pub use crate::router::{Method, Router, Routes, UNHANDLED_STATUS};
}
