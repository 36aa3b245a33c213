//! 记录表格状态

/// 表格选中状态
///
/// 记录本身由 `RecordManager` 持有，这里只记录选中行，
/// 每次列表被替换后需调用 [`RecordsState::clamp`]。
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 当前选中的索引
    pub selected: usize,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表长度变化后修正选中项
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
