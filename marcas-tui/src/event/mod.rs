//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     handle_event 按以下顺序分发按键：
//!         - 有弹窗打开时，只处理弹窗按键（弹窗是阻塞的）
//!         - 全局快捷键（退出、帮助、重新加载）
//!         - 编辑模式：表单按键
//!         - 列表模式：焦点在搜索栏时为搜索按键，否则为表格按键
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
