//! 配置加载示例
//!
//! 演示如何从文件加载配置并进行验证

use cuehttp_config::RouterConfig;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== cuehttp 配置加载示例 ===\n");

    // 示例 1: 使用默认配置
    println!("1. 使用默认配置:");
    let config = RouterConfig::default();
    println!("   前缀: {:?}", config.prefix);
    println!("   哨兵状态码: {}", config.unhandled_status);
    println!();

    // 示例 2: 从文件加载配置
    println!("2. 从文件加载配置:");
    let config_path = Path::new("examples/config_example.toml");
    match RouterConfig::from_file(config_path) {
        Ok(config) => {
            println!("   ✓ 配置加载成功");
            println!("   前缀: {:?}", config.prefix);
            println!("   哨兵状态码: {}", config.unhandled_status);
        }
        Err(e) => {
            println!("   ✗ 配置加载失败: {}", e);
        }
    }
    println!();

    // 示例 3: 配置验证
    println!("3. 配置验证:");
    let valid_config = RouterConfig {
        prefix: "/api".to_string(),
        ..Default::default()
    };
    match valid_config.validate() {
        Ok(_) => println!("   ✓ 配置有效"),
        Err(e) => println!("   ✗ 配置无效: {}", e),
    }
    println!();

    // 示例 4: 无效配置
    println!("4. 无效配置示例:");
    let invalid_config = RouterConfig {
        prefix: "api".to_string(),
        ..Default::default()
    };
    match invalid_config.validate() {
        Ok(_) => println!("   ✓ 配置有效"),
        Err(e) => println!("   ✗ 配置无效: {}", e),
    }

    Ok(())
}
