//! 环境变量覆盖示例
//!
//! 演示如何使用环境变量覆盖配置

use cuehttp_config::RouterConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== cuehttp 环境变量覆盖示例 ===\n");

    // 示例 1: 设置环境变量
    println!("1. 设置环境变量:");
    unsafe {
        std::env::set_var("CUEHTTP_PREFIX", "/v1");
        std::env::set_var("CUEHTTP_UNHANDLED_STATUS", "404");
    }
    println!("   CUEHTTP_PREFIX=/v1");
    println!("   CUEHTTP_UNHANDLED_STATUS=404");
    println!();

    // 示例 2: 加载默认配置并应用环境变量覆盖
    println!("2. 加载默认配置并应用环境变量覆盖:");
    let config = RouterConfig::default().load_with_env_override()?;

    println!("   ✓ 配置加载成功:");
    println!("     - 前缀: {:?}", config.prefix);
    println!("     - 哨兵状态码: {}", config.unhandled_status);
    println!();

    // 示例 3: 验证配置
    println!("3. 验证配置:");
    match config.validate() {
        Ok(_) => println!("   ✓ 配置有效"),
        Err(e) => println!("   ✗ 配置无效: {}", e),
    }
    println!();

    // 示例 4: 查看配置摘要
    println!("4. 配置摘要:");
    println!("{}", config.summary());
    println!();

    // 清理环境变量
    unsafe {
        std::env::remove_var("CUEHTTP_PREFIX");
        std::env::remove_var("CUEHTTP_UNHANDLED_STATUS");
    }

    println!("5. 清理环境变量后:");
    let config = RouterConfig::default().load_with_env_override()?;
    println!("   前缀: {:?}", config.prefix);
    println!("   哨兵状态码: {}", config.unhandled_status);

    Ok(())
}
