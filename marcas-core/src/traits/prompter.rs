use async_trait::async_trait;

use crate::types::Notice;

/// 用户交互抽象
///
/// 平台层实现：终端对话框、脚本中的自动应答等。两个方法都在用户作出
/// 响应后才返回，调用方在此期间不会继续执行。
#[async_trait]
pub trait Prompter: Send + Sync {
    /// 请求用户确认；返回 true 表示确认
    async fn confirm(&self, message: &str) -> bool;

    /// 阻塞式提示
    async fn alert(&self, notice: &Notice);
}
