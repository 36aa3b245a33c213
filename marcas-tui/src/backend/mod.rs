//!
//! src/backend/mod.rs
//! Backend 层：配置和网络请求
//!
//! Backend 层与 UI 解耦，有模块结构：
//!     src/backend/mod.rs
//!         mod config;         // 配置文件（JSON）
//!         mod dispatcher;     // 在 tokio 运行时上执行 Command
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在表单中按 Ctrl+S
//!         ↓
//!     Update 层调用 RecordManager::submit()，得到 Command 放入 App.outbox
//!         ↓
//!     主循环把 outbox 交给 Dispatcher::dispatch()
//!         ↓
//!     tokio 任务中 marcas_core::execute() 调用 HttpMarcaClient
//!         ↓
//!     Reply 经 mpsc 通道回到主循环
//!         ↓
//!     Update 层处理 AppMessage::Api(reply)：RecordManager::apply() 产生 Effect
//!         ↓
//!     Notify → 弹出提示；Dispatch → 再次进入 outbox（例如保存后重新加载）
//!

mod config;
mod dispatcher;

pub use config::{apply_env_override, ConfigService, JsonConfigService, API_URL_ENV};
pub use dispatcher::Dispatcher;
