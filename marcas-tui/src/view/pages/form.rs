//! 商标表单页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use marcas_core::DraftField;

use crate::i18n::{category_label, field_label, status_label, t};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染表单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let draft = app.records.draft();
    let mut lines = Vec::new();

    for field in DraftField::ALL {
        let focused = app.form.focused == field;
        let value_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {}", field_label(texts, field)),
            Style::default().fg(c.muted),
        ));

        let value = match field {
            DraftField::Category => match draft.category {
                Some(category) => option_display(category_label(texts, category), focused),
                None if focused => format!("◀ {} ▶", texts.form.select),
                None => {
                    lines.push(Line::styled(
                        format!("    {}", texts.form.select),
                        Style::default().fg(c.muted),
                    ));
                    continue;
                }
            },
            DraftField::Status => option_display(status_label(texts, draft.status), focused),
            _ => {
                let text = draft.text(field).unwrap_or_default();
                if focused {
                    format!("{text}▎")
                } else {
                    text.to_string()
                }
            }
        };
        lines.push(Line::styled(format!("    {value}"), value_style));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", texts.form.required_note),
        Style::default().fg(c.muted),
    ));

    if app.records.is_busy() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  ⟳ {}", texts.form.saving),
            Style::default().fg(c.warning),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 选择型字段：获得焦点时两侧显示切换箭头
fn option_display(label: &str, focused: bool) -> String {
    if focused {
        format!("◀ {label} ▶")
    } else {
        label.to_string()
    }
}
