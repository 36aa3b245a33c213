//! 显示格式化

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 注册日期显示为 `dd/mm/yyyy`，缺失时显示占位文本
pub fn format_date(date: Option<DateTime<Utc>>, not_available: &str) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => not_available.to_string(),
    }
}

/// 按终端显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
