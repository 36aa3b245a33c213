//! 商标列表页面视图

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use marcas_core::types::Marca;

use crate::i18n::{category_label, status_label, t};
use crate::model::App;
use crate::util::{format_date, truncate_to_width};
use crate::view::theme::{colors, Styles};

/// 名称列中描述的最大显示宽度
const DESCRIPTION_WIDTH: usize = 40;

/// 渲染列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.records.records().is_empty() {
        render_empty(app, frame, area);
    } else {
        render_table(app, frame, area);
    }
}

/// 渲染空状态（加载中 / 无记录 / 搜索无结果）
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();

    let (message, hint) = if app.records.is_busy() {
        (texts.common.loading, "")
    } else if app.records.search_term().trim().is_empty() {
        (texts.list.empty, texts.list.empty_hint)
    } else {
        (texts.list.empty_search, texts.list.empty_search_hint)
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(format!("  {hint}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染记录表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let l = &texts.list;

    let header = Row::new(vec![
        l.col_name,
        l.col_holder,
        l.col_number,
        l.col_category,
        l.col_status,
        l.col_date,
        l.col_actions,
    ])
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = app.records.records().iter().map(record_row).collect();

    let widths = [
        Constraint::Percentage(26),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(10),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.table.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 单条记录的表格行：名称下方显示描述，状态按颜色区分
fn record_row(marca: &Marca) -> Row<'static> {
    let c = colors();
    let texts = t();

    let mut name_lines = vec![Line::from(Span::styled(
        marca.name.clone(),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ))];
    let height = match marca.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            name_lines.push(Line::styled(
                truncate_to_width(description, DESCRIPTION_WIDTH),
                Style::default().fg(c.muted),
            ));
            2
        }
        _ => 1,
    };

    let status = Span::styled(
        format!(" {} ", status_label(texts, marca.status)),
        Style::default()
            .fg(c.status(marca.status))
            .add_modifier(Modifier::BOLD),
    );

    Row::new(vec![
        Cell::from(name_lines),
        Cell::from(marca.holder.clone()),
        Cell::from(marca.registration_number.clone()),
        Cell::from(category_label(texts, marca.category)),
        Cell::from(Line::from(status)),
        Cell::from(format_date(marca.registered_at, texts.common.not_available)),
        Cell::from(Span::styled(texts.list.actions_hint, Style::default().fg(c.muted))),
    ])
    .height(height)
}
