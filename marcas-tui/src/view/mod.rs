//!
//! src/view/mod.rs
//! View 层：只读地把 App 状态渲染到屏幕
//!
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 内容区 + 状态栏 + 弹窗
//!         mod components;     // 状态栏、搜索栏、弹窗
//!         mod pages;          // 列表页、表单页
//!         pub mod theme;      // 颜色和样式
//!
//! 内容区显示哪个页面由 RecordManager 的模式决定：
//! Listing 显示列表页，Editing 显示表单页。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
