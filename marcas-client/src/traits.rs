use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Marca, MarcaId, MarcaPayload};

/// 商标服务 Trait
///
/// 对应远端服务的五个端点。每个方法恰好发出一次请求，不重试、不合并。
#[async_trait]
pub trait MarcaApi: Send + Sync {
    /// `GET /marcas/`
    async fn list(&self) -> Result<Vec<Marca>>;

    /// `GET /marcas/buscar/{term}`，匹配规则由服务端决定
    async fn search(&self, term: &str) -> Result<Vec<Marca>>;

    /// `POST /marcas/`
    async fn create(&self, payload: &MarcaPayload) -> Result<Marca>;

    /// `PUT /marcas/{id}`
    async fn update(&self, id: MarcaId, payload: &MarcaPayload) -> Result<Marca>;

    /// `DELETE /marcas/{id}`
    async fn delete(&self, id: MarcaId) -> Result<()>;
}
