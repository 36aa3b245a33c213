//! 表格消息处理

use crate::message::ContentMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) {
    let len = app.records.records().len();
    match msg {
        ContentMessage::SelectPrevious => app.table.select_previous(),
        ContentMessage::SelectNext => app.table.select_next(len),
        ContentMessage::SelectFirst => app.table.select_first(),
        ContentMessage::SelectLast => app.table.select_last(len),

        ContentMessage::Add => {
            app.records.begin_create();
            app.form.reset();
        }

        ContentMessage::Edit => {
            let Some(record) = app.records.records().get(app.table.selected).cloned() else {
                return;
            };
            app.records.begin_edit(&record);
            app.form.reset();
        }

        ContentMessage::Delete => {
            let Some(record) = app.records.records().get(app.table.selected) else {
                return;
            };
            let (id, name) = (record.id, record.name.clone());
            app.modal.show_confirm_delete(id, &name);
        }
    }
}
