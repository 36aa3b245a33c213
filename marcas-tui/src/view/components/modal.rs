//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use marcas_core::Notice;

use crate::i18n::{notice_text, t};
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { name, focus, .. } => render_confirm_delete(frame, name, *focus),
        Modal::Alert { notice } => render_alert(frame, notice, app.modal.pending()),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 画弹窗边框并返回内容区域
fn frame_modal(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let c = colors();
    let texts = &t().modal.confirm_delete;

    let area = centered_rect(52, 9, frame.area());
    let inner = frame_modal(frame, area, texts.title, c.error);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.message, Style::default().fg(c.fg)),
        Line::styled(format!("\"{name}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm_button), confirm_style),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// 渲染提示弹窗；`pending` 为排队中的后续提示数
fn render_alert(frame: &mut Frame, notice: &Notice, pending: usize) {
    let c = colors();
    let texts = t();

    let (title, border) = if notice.is_error() {
        (texts.modal.alert.error_title, c.error)
    } else {
        (texts.modal.alert.info_title, c.success)
    };

    let area = centered_rect(56, 9, frame.area());
    let inner = frame_modal(frame, area, title, border);

    let mut close_hint = texts.modal.alert.close_hint.to_string();
    if pending > 0 {
        close_hint.push_str(&format!(" (+{pending})"));
    }

    let lines = vec![
        Line::from(""),
        Line::styled(notice_text(texts, notice), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let texts = t();
    let h = &texts.hints;

    let area = centered_rect(56, 24, frame.area());
    let inner = frame_modal(frame, area, texts.help.title, c.highlight);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.help.list_section),
        entry("↑↓/jk", h.navigate),
        entry("Alt+a", h.new),
        entry("Enter", h.edit),
        entry("Alt+d", h.delete),
        entry("/", h.search),
        entry("Alt+c", h.clear),
        entry("Tab", h.switch_focus),
        entry("Alt+r", h.reload),
        Line::from(""),
        section(texts.help.form_section),
        entry("Tab/↓", h.next_field),
        entry("←→", h.switch_option),
        entry("Ctrl+s", h.submit),
        entry("Esc", h.cancel),
        Line::from(""),
        entry("Alt+h", h.help),
        entry("Alt+q", h.quit),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
