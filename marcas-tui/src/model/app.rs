//! 应用主状态结构

use marcas_core::{Command, RecordManager};

use super::{FocusPanel, FormState, ModalState, RecordsState, SearchState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列表页面焦点
    pub focus: FocusPanel,

    /// 记录管理器（记录、草稿、模式、在途请求）
    pub records: RecordManager,

    /// 表格选中状态
    pub table: RecordsState,
    /// 搜索输入
    pub search: SearchState,
    /// 表单焦点
    pub form: FormState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 服务地址（显示在标题栏）
    pub api_url: String,

    /// 待发送的命令
    outbox: Vec<Command>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            records: RecordManager::new(),
            table: RecordsState::new(),
            search: SearchState::default(),
            form: FormState::default(),
            modal: ModalState::new(),
            status_message: None,
            api_url: api_url.into(),
            outbox: Vec::new(),
        }
    }

    /// 排队一个待发送的命令
    pub fn queue(&mut self, command: Command) {
        self.outbox.push(command);
    }

    /// 取出所有待发送的命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    /// 启动时加载全部记录
    pub fn request_initial_load(&mut self) {
        let command = self.records.load_all();
        self.queue(command);
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
