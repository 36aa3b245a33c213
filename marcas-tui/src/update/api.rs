//! 网络回复处理

use marcas_core::{Effect, Reply};

use crate::model::App;

/// 把回复交给 RecordManager，并执行它返回的副作用
pub fn update(app: &mut App, reply: Reply) {
    for effect in app.records.apply(reply) {
        match effect {
            Effect::Notify(notice) => app.modal.show_alert(notice),
            Effect::Dispatch(command) => app.queue(command),
        }
    }
    let len = app.records.records().len();
    app.table.clamp(len);

    if !app.records.is_busy() {
        app.clear_status();
    }
}
