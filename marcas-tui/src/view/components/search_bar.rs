//! 搜索栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let focused = app.focus.is_search();

    let block = Block::default()
        .title(format!(" {} ", texts.list.search_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let input = &app.search.input;
    let line = if input.is_empty() && !focused {
        Line::styled(
            format!(" 🔍 {}", texts.list.search_placeholder),
            Style::default().fg(c.muted),
        )
    } else {
        let mut spans = vec![Span::raw(" 🔍 "), Span::styled(input.clone(), Style::default().fg(c.fg))];
        if focused {
            spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
