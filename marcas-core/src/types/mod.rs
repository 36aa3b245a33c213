//! 核心层类型定义

mod command;
mod draft;
mod notice;

pub use command::{Command, Reply, Request, Response, Ticket};
pub use draft::{Draft, DraftField};
pub use notice::{Effect, Notice};

// 重新导出客户端类型，平台层只需依赖 core
pub use marcas_client::{Category, Marca, MarcaId, MarcaPayload, MarcaStatus};
