//! 命令执行

use marcas_client::MarcaApi;

use crate::types::{Command, Reply, Request, Response};

/// 执行命令：每个命令恰好发出一次请求，不重试
pub async fn execute(api: &dyn MarcaApi, command: Command) -> Reply {
    let result = match &command.request {
        Request::List => api.list().await.map(Response::Records),
        Request::Search { term } => api.search(term).await.map(Response::Records),
        Request::Create(payload) => api.create(payload).await.map(Response::Saved),
        Request::Update { id, payload } => api.update(*id, payload).await.map(Response::Saved),
        Request::Delete(id) => api.delete(*id).await.map(|()| Response::Deleted),
    };
    Reply::new(command, result)
}
