//! 搜索栏消息

/// 搜索栏相关消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 聚焦搜索栏
    Focus,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 执行搜索
    Submit,
    /// 清空并重新加载
    Clear,
}
