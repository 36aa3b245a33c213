//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use marcas_core::{DraftField, Mode};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, ModalMessage, SearchMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 可作为文本输入的字符（无修饰键或仅 Shift）
fn text_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗是阻塞的：打开时吞掉其它所有按键
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    match app.records.mode() {
        Mode::Editing => handle_form_keys(key, app),
        Mode::Listing => handle_listing_keys(key, app),
    }
}

/// 列表模式下的按键
fn handle_listing_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::SEARCH_CLEAR.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_table_keys(key)
    }
}

/// 搜索栏按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if let Some(c) = text_char(&key) {
        return AppMessage::Search(SearchMessage::Input(c));
    }
    match key.code {
        KeyCode::Enter => AppMessage::Search(SearchMessage::Submit),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 表格按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::SEARCH_FOCUS.matches(&key) {
        return AppMessage::Search(SearchMessage::Focus);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: 编辑选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 表单按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::FORM_SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    let focused = app.form.focused;
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ← →: 切换选项（仅分类和状态字段）
        KeyCode::Left if !focused.is_text() => AppMessage::Form(FormMessage::PrevOption),
        KeyCode::Right if !focused.is_text() => AppMessage::Form(FormMessage::NextOption),

        // Enter: 最后一个字段提交，其它字段跳到下一个
        KeyCode::Enter => {
            if app.form.is_last() {
                AppMessage::Form(FormMessage::Submit)
            } else {
                AppMessage::Form(FormMessage::NextField)
            }
        }

        KeyCode::Backspace if focused.is_text() => AppMessage::Form(FormMessage::Backspace),

        _ => match text_char(&key) {
            Some(c) if focused.is_text() => AppMessage::Form(FormMessage::Input(c)),
            Some(' ') if focused == DraftField::Category || focused == DraftField::Status => {
                AppMessage::Form(FormMessage::NextOption)
            }
            _ => AppMessage::Noop,
        },
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 提示和帮助弹窗只响应关闭按键
        Modal::Alert { .. } | Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use marcas_core::Notice;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> Event {
        press(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new("http://localhost:8000");
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &app), AppMessage::Noop));
    }

    #[test]
    fn global_shortcuts() {
        let app = App::new("http://localhost:8000");
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(handle_event(alt('h'), &app), AppMessage::ShowHelp));
        assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
    }

    #[test]
    fn table_keys() {
        let app = App::new("http://localhost:8000");
        assert!(matches!(
            handle_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Edit)
        ));
        assert!(matches!(
            handle_event(alt('e'), &app),
            AppMessage::Content(ContentMessage::Edit)
        ));
        assert!(matches!(
            handle_event(alt('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('/')), &app),
            AppMessage::Search(SearchMessage::Focus)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(alt('c'), &app),
            AppMessage::Search(SearchMessage::Clear)
        ));
    }

    #[test]
    fn search_bar_takes_text() {
        let mut app = App::new("http://localhost:8000");
        app.focus = crate::model::FocusPanel::SearchBar;
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::Search(SearchMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Search(SearchMessage::Input('A'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Search(SearchMessage::Submit)
        ));
        assert!(matches!(handle_event(key(KeyCode::Esc), &app), AppMessage::GoBack));
    }

    #[test]
    fn form_keys_depend_on_focused_field() {
        let mut app = App::new("http://localhost:8000");
        app.records.begin_create();

        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Form(FormMessage::Input('j'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Left), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::NextField)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::CONTROL), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Form(FormMessage::Cancel)
        ));

        app.form.focused = DraftField::Category;
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Form(FormMessage::NextOption)
        ));

        app.form.focused = DraftField::Description;
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
    }

    #[test]
    fn open_modal_swallows_input() {
        let mut app = App::new("http://localhost:8000");
        app.modal.show_alert(Notice::Deleted);

        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Noop));
        assert!(matches!(handle_event(alt('a'), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}
