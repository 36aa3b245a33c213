//! Trademark Registry TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置和请求分发 (`backend/`)
//!
//! 记录、草稿和请求状态由 `marcas_core::RecordManager` 管理，
//! 网络请求由 `marcas_client::HttpMarcaClient` 发出。
//!
//!
//! main.rs 的执行顺序：
//!
//!     init_logging()          // 日志写入文件，终端留给 TUI
//!     JsonConfigService       // 读取配置，首次运行写入默认配置
//!     set_language / set_theme
//!     tokio Runtime           // 网络请求在这里执行
//!     Dispatcher              // Command -> Reply 通道
//!     init_terminal()
//!     App::new() + 初始加载
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};

use marcas_client::HttpMarcaClient;

use backend::{apply_env_override, ConfigService, Dispatcher, JsonConfigService, API_URL_ENV};
use util::{default_log_dir, init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 持有到 main 结束）
    let _log_guard = init_logging(&default_log_dir())?;
    tracing::info!("Starting marcas-tui v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service = JsonConfigService::default();
    let file_config = config_service.load()?;
    if !config_service.exists() {
        match config_service.save(&file_config) {
            Ok(()) => tracing::info!("Wrote default config to {}", config_service.path().display()),
            Err(e) => tracing::warn!("Could not write default config: {e}"),
        }
    }
    let config = apply_env_override(file_config, std::env::var(API_URL_ENV).ok());

    let (language, theme) = (config.language(), config.theme());
    i18n::set_language(language);
    view::theme::set_theme(theme);
    tracing::info!("Language: {}, theme: {}", language.display_name(), theme.name());

    // 3. 运行时和客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let client = HttpMarcaClient::new(&config.client_config())
        .with_context(|| format!("Invalid service URL '{}'", config.api_url))?;
    tracing::info!("Using trademark service at {}", client.base_url());
    let (dispatcher, mut replies) = Dispatcher::new(Arc::new(client), runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并加载记录
    let mut app = model::App::new(config.api_url.clone());
    app.request_initial_load();

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &dispatcher, &mut replies);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
