//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 记录、草稿、模式和在途请求都由 `marcas_core::RecordManager` 持有，
//! 这里只补充界面自身的状态：焦点、选中行、搜索输入、表单焦点和弹窗。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（SearchBar / Table）
//!         pub mod state;      // 列表、表单、搜索、弹窗状态
//!
//!
//! 网络请求：
//!     Update 层调用 RecordManager 得到 Command，放入 App 的待发队列；
//!     app.rs 在每轮循环开始时把队列交给 backend::Dispatcher，
//!     回复经 mpsc 通道回到主循环，再作为 AppMessage::Api 送入 Update 层。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{FormState, Modal, ModalState, RecordsState, SearchState};
