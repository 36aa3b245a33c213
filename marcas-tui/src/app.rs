//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     for command in app.take_commands() {           // 把 Update 层排队的请求交给后台
//!         dispatcher.dispatch(command)
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(reply) = replies.try_recv() {      // 处理已经返回的请求结果
//!         update::update(&mut app , AppMessage::Api(reply))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }
//!
//! 回复只在主循环中被消费，状态始终只有一个写入者。
//! 退出时尚未返回的请求直接丢弃。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use marcas_core::Reply;

use crate::backend::Dispatcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &Dispatcher,
    replies: &mut UnboundedReceiver<Reply>,
) -> Result<()> {
    loop {
        // 1. 发送排队的请求
        for command in app.take_commands() {
            dispatcher.dispatch(command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            tracing::info!("Quit requested, {} request(s) in flight", app.records.in_flight());
            break;
        }

        // 4. 处理已返回的请求结果
        while let Ok(reply) = replies.try_recv() {
            update::update(app, AppMessage::Api(reply));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
