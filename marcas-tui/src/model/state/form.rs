//! 表单状态

use marcas_core::DraftField;

/// 表单焦点（字段内容在 `RecordManager` 的草稿中）
#[derive(Debug, Clone, Copy)]
pub struct FormState {
    pub focused: DraftField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            focused: DraftField::ALL[0],
        }
    }
}

impl FormState {
    fn position(self) -> usize {
        DraftField::ALL
            .iter()
            .position(|f| *f == self.focused)
            .unwrap_or(0)
    }

    /// 下一个字段（循环）
    pub fn focus_next(&mut self) {
        let all = DraftField::ALL;
        self.focused = all[(self.position() + 1) % all.len()];
    }

    /// 上一个字段（循环）
    pub fn focus_prev(&mut self) {
        let all = DraftField::ALL;
        self.focused = all[(self.position() + all.len() - 1) % all.len()];
    }

    /// 焦点是否在最后一个字段
    pub fn is_last(self) -> bool {
        self.position() == DraftField::ALL.len() - 1
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
