//! 请求上下文契约
//!
//! 定义路由器对外部请求状态对象的最小依赖。

/// 请求上下文契约
///
/// 上下文由外层管道拥有，路由器在一次分发期间以可变借用访问，
/// 既不拥有它也不在分发结束后保留它。
pub trait Context {
    /// 当前请求方法
    fn method(&self) -> &str;

    /// 当前请求路径
    fn path(&self) -> &str;

    /// 当前响应状态码
    fn status(&self) -> u16;

    /// 设置响应状态码
    fn set_status(&mut self, status: u16);

    /// 设置响应重定向目标
    fn redirect(&mut self, target: String);
}
