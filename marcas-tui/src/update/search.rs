//! 搜索栏消息处理

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Focus => app.focus = FocusPanel::SearchBar,
        SearchMessage::Input(c) => app.search.push(c),
        SearchMessage::Backspace => app.search.backspace(),

        SearchMessage::Submit => {
            let command = app.records.search(&app.search.input);
            app.queue(command);
            app.table.select_first();
            app.focus = FocusPanel::Table;
        }

        SearchMessage::Clear => {
            app.search.clear();
            let command = app.records.search("");
            app.queue(command);
            app.table.select_first();
        }
    }
}
