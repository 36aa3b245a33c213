//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认（删除确认弹窗中按当前焦点执行）
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,
}
