//! 弹窗消息处理

use marcas_core::Confirmation;

use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::ToggleDeleteFocus => app.modal.toggle_delete_focus(),
        ModalMessage::Confirm => confirm(app),
    }
}

fn confirm(app: &mut App) {
    if let Some(Modal::ConfirmDelete { id, focus, .. }) = app.modal.active {
        let confirmation = Confirmation::from(focus == 1);
        if let Some(command) = app.records.remove(id, confirmation) {
            app.queue(command);
        }
    }
    app.modal.close();
}
