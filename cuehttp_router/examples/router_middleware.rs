//! # cuehttp 路由和中间件示例
//!
//! ## 功能说明
//!
//! 这个示例展示了 cuehttp 路由和中间件系统的用法，包括：
//! - 多种处理器形状的注册与归一化
//! - 洋葱模型中间件链（前置/后置逻辑、短路）
//! - 前缀路由和重定向
//!
//! ## 运行方式
//!
//! ```bash
//! cargo run --example router_middleware
//! ```

use cuehttp_router::prelude::*;

/// 演示用请求上下文
struct DemoContext {
    method: String,
    path: String,
    status: u16,
    redirect_target: Option<String>,
    body: Vec<String>,
}

impl DemoContext {
    fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status: UNHANDLED_STATUS,
            redirect_target: None,
            body: Vec::new(),
        }
    }
}

impl Context for DemoContext {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    fn redirect(&mut self, target: String) {
        self.redirect_target = Some(target);
    }
}

/// 日志中间件：展示洋葱模型的前置/后置逻辑
fn logging() -> Handler<DemoContext> {
    Handler::from_fn(|ctx: &mut DemoContext, next| {
        println!("   ↳ [LOG] {} {} 开始", ctx.method(), ctx.path());
        next.run(ctx);
        println!("   ↳ [LOG] 结束，状态码 {}", ctx.status());
    })
}

/// 认证中间件：令牌缺失时短路，不调用继续器
fn auth() -> Handler<DemoContext> {
    Handler::from_fn(|ctx: &mut DemoContext, next| {
        if ctx.path().ends_with("/admin") {
            println!("   ↳ [AUTH] 拒绝访问，链在此处短路");
            ctx.set_status(403);
            return;
        }
        next.run(ctx);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("╔════════════════════════════════════════╗");
    println!("║   cuehttp 路由和中间件示例             ║");
    println!("╚════════════════════════════════════════╝\n");

    // 构建阶段：注册路由
    let mut router = Router::with_prefix("/api");
    router
        .get(
            "/users",
            [
                logging(),
                auth(),
                Handler::from_fn_without_next(|ctx: &mut DemoContext| {
                    ctx.body.push("用户列表".to_string());
                    ctx.set_status(200);
                }),
            ],
        )
        .get("/admin", [logging(), auth(), Handler::from_fn_without_next(|ctx: &mut DemoContext| {
            ctx.body.push("管理面板".to_string());
            ctx.set_status(200);
        })])
        .all(
            "/ping",
            Handler::from_fn(|ctx: &mut DemoContext, _next| {
                ctx.body.push("pong".to_string());
                ctx.set_status(200);
            }),
        )
        .redirect("/old", "/api/users");

    // 冻结为服务阶段的只读路由表
    let routes = router.routes();
    println!("✓ 路由表构建完成，共 {} 项\n", routes.len());

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. 命中完整链
    println!("1. GET /api/users（完整链）:");
    let mut ctx = DemoContext::new("GET", "/api/users");
    routes.dispatch(&mut ctx);
    println!("   状态码: {}, 响应: {:?}\n", ctx.status(), ctx.body);

    // 2. 中间件短路
    println!("2. GET /api/admin（认证短路）:");
    let mut ctx = DemoContext::new("GET", "/api/admin");
    routes.dispatch(&mut ctx);
    println!("   状态码: {}, 响应: {:?}\n", ctx.status(), ctx.body);

    // 3. all 注册对所有方法生效
    println!("3. POST /api/ping（all 注册）:");
    let mut ctx = DemoContext::new("POST", "/api/ping");
    routes.dispatch(&mut ctx);
    println!("   状态码: {}, 响应: {:?}\n", ctx.status(), ctx.body);

    // 4. 重定向
    println!("4. GET /api/old（重定向）:");
    let mut ctx = DemoContext::new("GET", "/api/old");
    routes.dispatch(&mut ctx);
    println!(
        "   状态码: {}, 重定向到: {:?}\n",
        ctx.status(),
        ctx.redirect_target
    );

    // 5. 未命中：哨兵状态保持不变
    println!("5. GET /api/missing（未命中）:");
    let mut ctx = DemoContext::new("GET", "/api/missing");
    routes.dispatch(&mut ctx);
    println!("   状态码: {}（留给外层管道报告）\n", ctx.status());

    // 6. 已处理的上下文不再分发
    println!("6. GET /api/users（状态码已被上游设置）:");
    let mut ctx = DemoContext::new("GET", "/api/users");
    ctx.set_status(200);
    routes.dispatch(&mut ctx);
    println!("   响应: {:?}（路由器未介入）\n", ctx.body);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ 示例完成");
}
