//! cuehttp 集成测试
//!
//! 测试各个模块之间的集成功能。

// 配置系统集成测试
#[cfg(test)]
mod config_tests {
    use cuehttp::prelude::RouterConfig;

    #[test]
    fn test_config_default_and_validation() {
        let config = RouterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.unhandled_status, 404);
    }

    #[test]
    fn test_config_invalid_prefix() {
        let config = RouterConfig {
            prefix: "api".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_summary() {
        let config = RouterConfig::default();
        let summary = config.summary();
        assert!(summary.contains("404"));
    }
}

// 中间件链集成测试
#[cfg(test)]
mod middleware_tests {
    use cuehttp::prelude::{compose, Chain, Handler};

    type Log = Vec<&'static str>;

    fn marker(name: &'static str) -> Handler<Log> {
        Handler::from_fn(move |ctx: &mut Log, next| {
            ctx.push(name);
            next.run(ctx);
        })
    }

    #[test]
    fn test_chain_composition_order() {
        let composed = compose(Chain::from(vec![marker("a"), marker("b"), marker("c")]));
        let mut log = Log::new();
        composed.call(&mut log);
        assert_eq!(log, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_onion_wrapping() {
        let outer = Handler::from_fn(|ctx: &mut Log, next| {
            ctx.push("in");
            next.run(ctx);
            ctx.push("out");
        });

        let composed = compose(Chain::from(vec![outer, marker("core")]));
        let mut log = Log::new();
        composed.call(&mut log);
        assert_eq!(log, vec!["in", "core", "out"]);
    }
}

// 路由系统集成测试
#[cfg(test)]
mod router_tests {
    use cuehttp::prelude::*;

    struct RequestContext {
        method: String,
        path: String,
        status: u16,
        redirect_target: Option<String>,
        body: Vec<&'static str>,
    }

    impl RequestContext {
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

    impl Context for RequestContext {
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

    fn build_routes() -> Routes<RequestContext> {
        let mut router = Router::with_prefix("/api");
        router
            .get(
                "/users",
                [
                    Handler::from_fn(|ctx: &mut RequestContext, next| {
                        ctx.body.push("auth");
                        next.run(ctx);
                    }),
                    Handler::from_fn_without_next(|ctx: &mut RequestContext| {
                        ctx.body.push("list");
                        ctx.set_status(200);
                    }),
                ],
            )
            .post(
                "/users",
                Handler::from_fn(|ctx: &mut RequestContext, _next| {
                    ctx.body.push("create");
                    ctx.set_status(201);
                }),
            )
            .all(
                "/ping",
                Handler::from_fn(|ctx: &mut RequestContext, _next| {
                    ctx.body.push("pong");
                    ctx.set_status(200);
                }),
            )
            .redirect("/old", "/api/users");
        router.routes()
    }

    #[test]
    fn test_full_chain_dispatch() {
        let routes = build_routes();

        let mut ctx = RequestContext::new("GET", "/api/users");
        routes.dispatch(&mut ctx);

        assert_eq!(ctx.body, vec!["auth", "list"]);
        assert_eq!(ctx.status(), 200);
    }

    #[test]
    fn test_method_routing() {
        let routes = build_routes();

        let mut ctx = RequestContext::new("POST", "/api/users");
        routes.dispatch(&mut ctx);

        assert_eq!(ctx.body, vec!["create"]);
        assert_eq!(ctx.status(), 201);
    }

    #[test]
    fn test_all_methods_served() {
        let routes = build_routes();

        for method in Method::ALL {
            let mut ctx = RequestContext::new(method.as_str(), "/api/ping");
            routes.dispatch(&mut ctx);
            assert_eq!(ctx.body, vec!["pong"]);
            assert_eq!(ctx.status(), 200);
        }
    }

    #[test]
    fn test_redirect_route() {
        let routes = build_routes();

        let mut ctx = RequestContext::new("GET", "/api/old");
        routes.dispatch(&mut ctx);

        assert_eq!(ctx.status(), 301);
        assert_eq!(ctx.redirect_target.as_deref(), Some("/api/users"));
    }

    #[test]
    fn test_unmatched_path_keeps_sentinel() {
        let routes = build_routes();

        let mut ctx = RequestContext::new("GET", "/api/missing");
        routes.dispatch(&mut ctx);

        assert!(ctx.body.is_empty());
        assert_eq!(ctx.status(), UNHANDLED_STATUS);
    }

    #[test]
    fn test_handled_context_untouched() {
        let routes = build_routes();

        let mut ctx = RequestContext::new("GET", "/api/users");
        ctx.set_status(200);
        routes.dispatch(&mut ctx);

        assert!(ctx.body.is_empty());
        assert_eq!(ctx.status(), 200);
    }

    #[test]
    fn test_dispatch_via_pipeline_fn() {
        let dispatch = build_routes().into_fn();

        let mut ctx = RequestContext::new("GET", "/api/users");
        dispatch(&mut ctx);
        assert_eq!(ctx.status(), 200);
    }
}

// 错误处理集成测试
#[cfg(test)]
mod error_tests {
    use cuehttp::prelude::RouterConfig;
    use cuehttp::Error;

    #[test]
    fn test_error_from_config() {
        let config = RouterConfig {
            unhandled_status: 0,
            ..Default::default()
        };
        let err: Error = config.validate().unwrap_err().into();
        assert!(err.to_string().contains("配置验证失败"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_custom_error_display() {
        let err = Error::Custom("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }
}
