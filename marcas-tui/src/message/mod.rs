//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和网络回复都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 表格中的操作
//!         mod form;           // 表单中的输入
//!         mod modal;          // 弹窗中的操作
//!         mod search;         // 搜索栏中的输入
//!
//!     网络回复同样是一条消息：AppMessage::Api(Reply)，
//!     由 app.rs 从 mpsc 通道取出后送入 Update 层。
//!

mod app;
mod content;
mod form;
mod modal;
mod search;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
