//! 用户通知与副作用

use std::fmt;

use marcas_client::ClientError;
use serde::Serialize;

use super::command::Command;
use super::draft::DraftField;

/// 需要展示给用户的通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    /// 新建 / 更新被服务拒绝；`detail` 为服务返回的原文
    SaveRejected { detail: Option<String> },
    /// 删除被服务拒绝
    DeleteRejected { detail: Option<String> },
    /// 加载列表失败
    LoadFailed { detail: Option<String> },
    /// 搜索失败
    SearchFailed { detail: Option<String> },
    /// 服务不可达
    ConnectionFailed,
    /// 服务返回了无法解析的内容
    UnexpectedResponse,
    /// 表单缺少必填字段
    MissingFields(Vec<DraftField>),
}

impl Notice {
    /// 是否为错误类通知
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Created | Self::Updated | Self::Deleted)
    }

    /// 保存（新建 / 更新）失败时的通知
    #[must_use]
    pub fn for_save_error(error: &ClientError) -> Self {
        match error {
            e if e.is_transport() => Self::ConnectionFailed,
            ClientError::Rejected { detail, .. } => Self::SaveRejected {
                detail: detail.clone(),
            },
            _ => Self::UnexpectedResponse,
        }
    }

    /// 删除失败时的通知
    #[must_use]
    pub fn for_delete_error(error: &ClientError) -> Self {
        if error.is_transport() {
            Self::ConnectionFailed
        } else {
            Self::DeleteRejected {
                detail: error.detail().map(str::to_string),
            }
        }
    }

    /// 列表 / 搜索失败时的通知
    #[must_use]
    pub fn for_list_error(error: &ClientError, searching: bool) -> Self {
        if error.is_transport() {
            return Self::ConnectionFailed;
        }
        let detail = error.detail().map(str::to_string);
        if searching {
            Self::SearchFailed { detail }
        } else {
            Self::LoadFailed { detail }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Trademark created successfully"),
            Self::Updated => write!(f, "Trademark updated successfully"),
            Self::Deleted => write!(f, "Trademark deleted successfully"),
            Self::SaveRejected { detail: Some(d) } => write!(f, "Error: {d}"),
            Self::SaveRejected { detail: None } => write!(f, "Error saving the trademark"),
            Self::DeleteRejected { detail: Some(d) } => {
                write!(f, "Error deleting the trademark: {d}")
            }
            Self::DeleteRejected { detail: None } => write!(f, "Error deleting the trademark"),
            Self::LoadFailed { detail: Some(d) } => write!(f, "Error loading trademarks: {d}"),
            Self::LoadFailed { detail: None } => write!(f, "Error loading trademarks"),
            Self::SearchFailed { detail: Some(d) } => {
                write!(f, "Error searching trademarks: {d}")
            }
            Self::SearchFailed { detail: None } => write!(f, "Error searching trademarks"),
            Self::ConnectionFailed => write!(f, "Could not connect to the trademark service"),
            Self::UnexpectedResponse => write!(f, "Unexpected response from the trademark service"),
            Self::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
                write!(f, "Please fill in the required fields: {}", names.join(", "))
            }
        }
    }
}

/// `apply` 产出的副作用，由调用方按顺序执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 阻塞式提示用户
    Notify(Notice),
    /// 执行后续命令（例如写操作成功后的重新加载）
    Dispatch(Command),
}
