//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

// 重新导出客户端错误类型
pub use marcas_client::ClientError;

use crate::types::DraftField;

/// 核心层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// 表单缺少必填字段（未发出任何请求）
    #[error("Missing required fields: {}", field_names(.0))]
    MissingFields(Vec<DraftField>),

    /// 用户未确认删除（未发出任何请求）
    #[error("Deletion not confirmed")]
    NotConfirmed,

    /// 客户端错误
    #[error("{0}")]
    Client(#[from] ClientError),
}

fn field_names(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl CoreError {
    /// 是否为预期行为（用户输入、服务拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingFields(_) | Self::NotConfirmed => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// 核心层 Result 类型别名
pub type CoreResult<T> = std::result::Result<T, CoreError>;
