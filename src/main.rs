// ============================================================================
// Nitrokit - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 启动 CLI 并将错误转换为退出码
//
// ============================================================================

use nitrokit::cli;
use nitrokit::utils::logger::Logger;

fn main() {
    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
