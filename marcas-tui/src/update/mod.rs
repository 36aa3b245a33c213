//!
//! src/update/mod.rs
//! Update 层：根据消息更新状态
//!
//! 唯一修改 Model 的地方。涉及网络的操作只调用 RecordManager 生成命令并
//! 放入待发队列，不在这里等待任何 I/O。
//!
//!     AppMessage::Content(..)  → content.rs
//!     AppMessage::Form(..)     → form.rs
//!     AppMessage::Search(..)   → search.rs
//!     AppMessage::Modal(..)    → modal.rs
//!     AppMessage::Api(reply)   → api.rs
//!

mod api;
mod content;
mod form;
mod modal;
mod search;

use marcas_core::Mode;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 表单和弹窗中不切换焦点
            if !app.modal.is_open() && app.records.mode() == Mode::Listing {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.records.mode() == Mode::Editing {
                app.records.cancel_edit();
            } else if app.focus.is_search() {
                app.focus = FocusPanel::Table;
            }
            app.clear_status();
        }

        AppMessage::Refresh => {
            let command = app.records.load_all();
            app.queue(command);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Api(reply) => {
            api::update(app, reply);
        }

        AppMessage::Noop => {}
    }
}
