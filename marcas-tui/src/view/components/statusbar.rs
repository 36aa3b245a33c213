//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use marcas_core::Mode;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前模式和焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    match app.records.mode() {
        Mode::Editing => {
            hints.push(("Tab", h.next_field));
            hints.push(("←→", h.switch_option));
            hints.push(("Ctrl+s", h.submit));
            hints.push(("Esc", h.cancel));
        }
        Mode::Listing if app.focus.is_search() => {
            hints.push(("Enter", h.run_search));
            hints.push(("Alt+c", h.clear));
            hints.push(("Tab", h.switch_focus));
            hints.push(("Esc", h.back));
        }
        Mode::Listing => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Alt+a", h.new));
            hints.push(("Enter", h.edit));
            hints.push(("Alt+d", h.delete));
            hints.push(("/", h.search));
            hints.push(("Alt+r", h.reload));
        }
    }

    hints.push(("Alt+h", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}
