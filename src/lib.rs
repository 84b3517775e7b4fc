//! # cuehttp - 洋葱模型 HTTP 请求路由框架
//!
//! cuehttp 将请求的 method+path 精确映射到一条有序的处理器链，并按
//! "洋葱模型"执行该链：每个处理器都可以在委托给下一个处理器之前和
//! 之后执行自己的逻辑。
//!
//! ## 特性
//!
//! - 多种注册形状归一化为统一的规范处理器
//! - 洋葱模型中间件链组合，支持短路和跳跃式前进
//! - method+prefix+path 精确匹配路由表
//! - 通过"未处理"哨兵状态码与外层管道协作
//! - 构建阶段与服务阶段由类型系统区分
//!
//! ## 快速开始
//!
//! ```rust,no_run,ignore
//! use cuehttp::prelude::*;
//!
//! let mut router = Router::<MyContext>::with_prefix("/api");
//! router
//!     .get("/users", Handler::from_fn(|ctx: &mut MyContext, next| {
//!         ctx.set_status(200);
//!         next.run(ctx);
//!     }))
//!     .redirect("/old", "/new");
//!
//! let routes = router.routes();
//! // 作为外层管道的一个阶段安装：
//! // routes.dispatch(&mut ctx);
//! ```
//!
//! ## 模块组织
//!
//! ### 配置模块
//! - RouterConfig - 路由器配置
//!
//! ### 路由模块
//! - Router - 路由构建器（构建阶段）
//! - Routes - 冻结路由表（服务阶段）
//! - Handler - 规范处理器
//! - Chain - 处理器链
//! - Next - 链继续器
//! - Context - 请求上下文契约

// ============================================================================
// Crate Re-exports
// ============================================================================

pub use cuehttp_config;

pub use cuehttp_router;

// ============================================================================
// Prelude Module
// ============================================================================

/// 预导出常用类型
///
/// 通过 `use cuehttp::prelude::*;` 导入所有常用类型
pub mod prelude {
    pub use cuehttp_config::{ConfigError, RouterConfig};

    pub use cuehttp_router::prelude::*;
}

// ============================================================================
// Error Types
// ============================================================================

/// cuehttp 统一错误类型
pub type Result<T> = std::result::Result<T, Error>;

/// cuehttp 统一错误枚举
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 配置错误
    #[error(transparent)]
    Config(#[from] cuehttp_config::ConfigError),

    /// IO 错误
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 自定义错误
    #[error("{0}")]
    Custom(String),
}

// ============================================================================
// Version Information
// ============================================================================

/// cuehttp 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// cuehttp 包名
pub const NAME: &str = env!("CARGO_PKG_NAME");
