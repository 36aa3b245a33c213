//! 表单消息处理

use marcas_core::{CoreError, DraftField, Notice};

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) {
    let field = app.form.focused;
    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_prev(),

        FormMessage::Input(c) => {
            if let Some(text) = app.records.draft_mut().text_mut(field) {
                text.push(c);
            }
        }

        FormMessage::Backspace => {
            if let Some(text) = app.records.draft_mut().text_mut(field) {
                text.pop();
            }
        }

        FormMessage::PrevOption | FormMessage::NextOption => {
            let forward = matches!(msg, FormMessage::NextOption);
            let draft = app.records.draft_mut();
            match field {
                DraftField::Category => draft.cycle_category(forward),
                DraftField::Status => draft.cycle_status(forward),
                _ => {}
            }
        }

        FormMessage::Submit => submit(app),

        FormMessage::Cancel => {
            app.records.cancel_edit();
            app.clear_status();
        }
    }
}

fn submit(app: &mut App) {
    if app.records.is_busy() {
        app.set_status(t().form.busy);
        return;
    }

    match app.records.submit() {
        Ok(command) => {
            app.set_status(t().form.saving);
            app.queue(command);
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Submit not sent: {e}");
            } else {
                log::error!("Submit not sent: {e}");
            }
            if let CoreError::MissingFields(fields) = e {
                app.modal.show_alert(Notice::MissingFields(fields));
            }
        }
    }
}
