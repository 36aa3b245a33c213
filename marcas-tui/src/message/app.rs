//! 应用主消息枚举

use marcas_core::Reply;

use super::{ContentMessage, FormMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（搜索栏 / 表格）
    ToggleFocus,

    /// 表格相关消息
    Content(ContentMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 搜索栏相关消息
    Search(SearchMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回（关闭表单 / 离开搜索栏）
    GoBack,

    /// 重新加载全部记录
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 网络请求的回复
    Api(Reply),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
