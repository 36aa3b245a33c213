//! 主布局渲染

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use marcas_core::Mode;
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名、服务地址、加载指示
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let indicator = if app.records.is_busy() {
        format!("⟳ {} ", texts.common.loading)
    } else {
        String::new()
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(u16::try_from(indicator.width()).unwrap_or(0)),
        ])
        .split(area);

    let left = Line::from(vec![
        Span::styled(format!(" {}", texts.common.app_name), Styles::title().fg(c.selected_fg)),
        Span::raw(format!("  {}", app.api_url)),
    ]);
    frame.render_widget(Paragraph::new(left).style(style), columns[0]);
    frame.render_widget(
        Paragraph::new(indicator).alignment(Alignment::Right).style(style),
        columns[1],
    );
}

/// 内容区：列表模式显示列表页，编辑模式显示表单页
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    match app.records.mode() {
        Mode::Listing => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(area);

            components::search_bar::render(app, frame, rows[0]);

            let title = format!(
                " {} ({} {}) ",
                texts.list.title,
                app.records.records().len(),
                texts.common.records
            );
            let inner = bordered(frame, rows[1], &title, !app.focus.is_search());
            pages::list::render(app, frame, inner);
        }
        Mode::Editing => {
            let title = if app.records.editing_target().is_some() {
                texts.form.title_edit
            } else {
                texts.form.title_new
            };
            let inner = bordered(frame, area, &format!(" {title} "), true);
            pages::form::render(app, frame, inner);
        }
    }
}

/// 画带标题的边框，返回内部区域
fn bordered(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let block = Block::default()
        .title(title.to_string())
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
