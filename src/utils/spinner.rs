// ============================================================================
// Nitrokit - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/utils/spinner.rs
// 职责: 终端加载动画显示组件
// 边界:
//   - ✅ 加载动画显示和控制
//   - ✅ 非终端或详细模式下自动关闭
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::utils::constants::spinner_chars;

/// Spinner 加载动画组件
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// 启动 Spinner；`enabled` 为 false 时所有操作都是空操作
    pub fn start(message: String, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars(spinner_chars::BASE));
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// 是否应显示 spinner：标准输出是终端且非详细模式
    pub fn should_show(verbose: bool) -> bool {
        !verbose && atty::is(atty::Stream::Stdout)
    }

    /// 停止并清除
    pub fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
