//! 请求 / 回复类型
//!
//! 管理器不直接访问网络：它产出 [`Command`]，由调用方执行后把 [`Reply`]
//! 交回 `RecordManager::apply`。

use marcas_client::{ClientError, Marca, MarcaId, MarcaPayload};

/// 在途请求的票据（单调递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// 对远端服务的一次请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// 获取全部记录
    List,
    /// 按关键字搜索（已确认非空白）
    Search { term: String },
    /// 新建记录
    Create(MarcaPayload),
    /// 更新指定记录
    Update { id: MarcaId, payload: MarcaPayload },
    /// 删除指定记录
    Delete(MarcaId),
}

impl Request {
    /// 是否为列表类请求（会整体替换 records）
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List | Self::Search { .. })
    }

    /// 用于日志的简短描述
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::List => "list".to_string(),
            Self::Search { term } => format!("search '{term}'"),
            Self::Create(payload) => format!("create '{}'", payload.registration_number),
            Self::Update { id, .. } => format!("update {id}"),
            Self::Delete(id) => format!("delete {id}"),
        }
    }
}

/// 待执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub ticket: Ticket,
    pub request: Request,
}

/// 成功响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// 列表或搜索结果
    Records(Vec<Marca>),
    /// 新建 / 更新后服务返回的记录
    Saved(Marca),
    /// 删除成功
    Deleted,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ticket: Ticket,
    pub request: Request,
    pub result: Result<Response, ClientError>,
}

impl Reply {
    #[must_use]
    pub fn new(command: Command, result: Result<Response, ClientError>) -> Self {
        Self {
            ticket: command.ticket,
            request: command.request,
            result,
        }
    }
}
