//! 中间件系统
//!
//! 规范处理器、链继续器与洋葱模型链组合。

use std::cell::Cell;
use std::sync::Arc;

/// 规范处理器的函数签名
type HandlerFn<C> = dyn for<'a, 'b> Fn(&'a mut C, Next<'b, C>) + Send + Sync;

/// 规范处理器
///
/// 所有注册形状最终归一化成的处理器类型。克隆是廉价的引用计数
/// 克隆，同一处理器可以出现在多个路由键下。
pub struct Handler<C> {
    f: Arc<HandlerFn<C>>,
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<C: 'static> Handler<C> {
    /// 从 (ctx, next) 形状的函数创建处理器
    ///
    /// 函数自行决定是否调用继续器：不调用则链在此处短路。
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut C, Next<'_, C>) + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// 从仅接收 ctx 的函数创建处理器
    ///
    /// 函数执行后无条件调用继续器，因此无法短路链。
    pub fn from_fn_without_next<F>(f: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |ctx: &mut C, next: Next<'_, C>| {
                f(ctx);
                next.run(ctx);
            }),
        }
    }

    /// 从绑定接收者的 (ctx, next) 方法创建处理器
    ///
    /// 接收者为 None 时跳过调用，继续器也不会被调用，链在此处停住。
    pub fn from_method<T>(receiver: Option<Arc<T>>, method: fn(&T, &mut C, Next<'_, C>)) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |ctx: &mut C, next: Next<'_, C>| {
                if let Some(receiver) = &receiver {
                    method(receiver, ctx, next);
                }
            }),
        }
    }

    /// 从无绑定接收者的 (ctx, next) 方法创建处理器
    ///
    /// 每次调用构造一个新的默认接收者。
    pub fn from_default_method<T>(method: fn(&T, &mut C, Next<'_, C>)) -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |ctx: &mut C, next: Next<'_, C>| {
                let receiver = T::default();
                method(&receiver, ctx, next);
            }),
        }
    }

    /// 从绑定接收者的仅接收 ctx 的方法创建处理器
    ///
    /// 接收者为 None 时跳过调用，继续器仍然会被调用。
    pub fn from_method_without_next<T>(receiver: Option<Arc<T>>, method: fn(&T, &mut C)) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |ctx: &mut C, next: Next<'_, C>| {
                if let Some(receiver) = &receiver {
                    method(receiver, ctx);
                }
                next.run(ctx);
            }),
        }
    }

    /// 从无绑定接收者的仅接收 ctx 的方法创建处理器
    ///
    /// 每次调用构造一个新的默认接收者，之后调用继续器。
    pub fn from_default_method_without_next<T>(method: fn(&T, &mut C)) -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |ctx: &mut C, next: Next<'_, C>| {
                let receiver = T::default();
                method(&receiver, ctx);
                next.run(ctx);
            }),
        }
    }

    /// 调用处理器
    pub fn call(&self, ctx: &mut C, next: Next<'_, C>) {
        (self.f.as_ref())(ctx, next)
    }
}

/// 链继续器
///
/// 携带链切片和本次分发的游标。`run` 将游标前移一位并调用新位置
/// 上的处理器；游标到达链尾后再调用是安全的空操作。
pub struct Next<'a, C> {
    handlers: &'a [Handler<C>],
    cursor: &'a Cell<usize>,
}

impl<C> Clone for Next<'_, C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers,
            cursor: self.cursor,
        }
    }
}

impl<C: 'static> Next<'_, C> {
    /// 调用链中的下一个处理器
    ///
    /// 游标由整条链的一次执行共享：同一处理器内的第二次调用会在
    /// 当前游标位置上再前移一位（跳跃式前进）。
    pub fn run(&self, ctx: &mut C) {
        let index = self.cursor.get() + 1;
        self.cursor.set(index);
        if index < self.handlers.len() {
            self.handlers[index].call(
                ctx,
                Next {
                    handlers: self.handlers,
                    cursor: self.cursor,
                },
            );
        }
    }
}

/// 处理器链
///
/// 一次注册中按参数顺序排列的处理器序列，顺序即执行顺序。
pub struct Chain<C> {
    handlers: Vec<Handler<C>>,
}

impl<C> Chain<C> {
    /// 创建空链
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// 追加处理器
    pub fn push(mut self, handler: Handler<C>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// 链中处理器数量
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// 链是否为空
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<C> Default for Chain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Chain<C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<C> From<Handler<C>> for Chain<C> {
    fn from(handler: Handler<C>) -> Self {
        Self {
            handlers: vec![handler],
        }
    }
}

impl<C> From<Vec<Handler<C>>> for Chain<C> {
    fn from(handlers: Vec<Handler<C>>) -> Self {
        Self { handlers }
    }
}

impl<C, const N: usize> From<[Handler<C>; N]> for Chain<C> {
    fn from(handlers: [Handler<C>; N]) -> Self {
        Self {
            handlers: handlers.into(),
        }
    }
}

/// 组合后的处理器
///
/// 一整条处理器链组合成的单一可调用对象。
pub struct Composed<C> {
    f: Arc<dyn Fn(&mut C) + Send + Sync>,
}

impl<C> Clone for Composed<C> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<C> Composed<C> {
    /// 执行组合处理器
    pub fn call(&self, ctx: &mut C) {
        (self.f.as_ref())(ctx)
    }
}

/// 组合处理器链
///
/// 空链组合为空操作；否则从 0 号处理器开始执行，游标归本次调用
/// 所有，每次调用都从头开始。
pub fn compose<C: 'static>(chain: Chain<C>) -> Composed<C> {
    let handlers = chain.handlers;
    Composed {
        f: Arc::new(move |ctx: &mut C| {
            if handlers.is_empty() {
                return;
            }
            let cursor = Cell::new(0);
            handlers[0].call(
                ctx,
                Next {
                    handlers: &handlers,
                    cursor: &cursor,
                },
            );
        }),
    }
}
