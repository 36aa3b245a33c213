//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod format;         // 日期格式化、按显示宽度截断
//!         mod logging;        // 文件日志（tracing）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     日志：
//!         TUI 占用了整个终端，日志不能写到 stdout/stderr，
//!         所以 init_logging() 把日志写入文件：
//!
//!             <data_dir>/marcas-tui/logs/marcas-tui.log
//!
//!         级别由环境变量 MARCAS_LOG 控制（EnvFilter 语法，默认 info）。
//!         marcas-client / marcas-core 使用 `log` 宏，经 LogTracer 桥接到同一个文件。
//!
//!         返回的 WorkerGuard 必须一直持有到程序退出，否则缓冲中的日志会丢失。
//!
//!
//!     终端：
//!         init_terminal() 启用原始模式并进入备用屏幕；
//!         restore_terminal() 必须在 app::run 返回后立即调用，无论成功失败。
//!

mod format;
mod logging;
mod terminal;

pub use format::{format_date, truncate_to_width};
pub use logging::{default_log_dir, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
