//! 弹窗/对话框状态

use std::collections::VecDeque;

use marcas_core::types::MarcaId;
use marcas_core::Notice;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 删除确认
    ConfirmDelete {
        id: MarcaId,
        name: String,
        /// 0 = 取消，1 = 删除
        focus: usize,
    },
    /// 阻塞式提示
    Alert { notice: Notice },
    /// 帮助
    Help,
}

/// 弹窗状态容器
///
/// 同一时间只显示一个弹窗；在已有弹窗时到达的提示进入队列，
/// 关闭当前弹窗后依次显示。
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    queue: VecDeque<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭当前弹窗，显示队列中的下一个
    pub fn close(&mut self) {
        self.active = self.queue.pop_front();
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 排队等待的弹窗数量
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn show(&mut self, modal: Modal) {
        if self.active.is_some() {
            self.queue.push_back(modal);
        } else {
            self.active = Some(modal);
        }
    }

    /// 显示删除确认弹窗（焦点默认在取消）
    pub fn show_confirm_delete(&mut self, id: MarcaId, name: &str) {
        self.show(Modal::ConfirmDelete {
            id,
            name: name.to_string(),
            focus: 0,
        });
    }

    /// 显示提示
    pub fn show_alert(&mut self, notice: Notice) {
        self.show(Modal::Alert { notice });
    }

    /// 显示帮助
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 在删除确认弹窗中切换按钮焦点
    pub fn toggle_delete_focus(&mut self) {
        if let Some(Modal::ConfirmDelete { focus, .. }) = &mut self.active {
            *focus = 1 - *focus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_queue_behind_open_modal() {
        let mut modal = ModalState::new();
        modal.show_alert(Notice::Created);
        modal.show_alert(Notice::ConnectionFailed);
        assert_eq!(modal.pending(), 1);

        assert_eq!(
            modal.active,
            Some(Modal::Alert {
                notice: Notice::Created
            })
        );
        modal.close();
        assert_eq!(
            modal.active,
            Some(Modal::Alert {
                notice: Notice::ConnectionFailed
            })
        );
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn delete_focus_toggles() {
        let mut modal = ModalState::new();
        modal.show_confirm_delete(MarcaId(3), "Acme");
        modal.toggle_delete_focus();
        assert!(matches!(modal.active, Some(Modal::ConfirmDelete { focus: 1, .. })));
        modal.toggle_delete_focus();
        assert!(matches!(modal.active, Some(Modal::ConfirmDelete { focus: 0, .. })));
    }
}
