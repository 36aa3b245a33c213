//! 焦点状态定义

/// 列表页面的焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索栏
    SearchBar,
    /// 记录表格
    #[default]
    Table,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::SearchBar => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::SearchBar,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::SearchBar)
    }
}
