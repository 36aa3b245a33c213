//! 命令分发器
//!
//! 把 Update 层产生的 `Command` 放到 tokio 运行时上执行，
//! 结果通过 mpsc 通道送回主循环。主循环是唯一修改状态的地方。

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use marcas_core::{execute, Command, MarcaApi, Reply};

/// 命令分发器
pub struct Dispatcher {
    api: Arc<dyn MarcaApi>,
    handle: Handle,
    tx: UnboundedSender<Reply>,
}

impl Dispatcher {
    /// 创建分发器，返回接收回复的一端
    pub fn new(api: Arc<dyn MarcaApi>, handle: Handle) -> (Self, UnboundedReceiver<Reply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { api, handle, tx }, rx)
    }

    /// 异步执行命令；请求之间互不等待
    pub fn dispatch(&self, command: Command) {
        tracing::debug!("Dispatching {}", command.request.describe());

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let reply = execute(api.as_ref(), command).await;
            // 接收端已关闭说明程序正在退出
            if tx.send(reply).is_err() {
                tracing::debug!("Reply dropped: receiver closed");
            }
        });
    }
}
