//! 表单消息

/// 表单相关消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换选项（左）
    PrevOption,
    /// 切换选项（右）
    NextOption,
    /// 提交
    Submit,
    /// 取消编辑
    Cancel,
}
