//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use async_trait::async_trait;
use marcas_client::{
    Category, ClientError, Marca, MarcaApi, MarcaId, MarcaPayload, MarcaStatus,
};
use tokio::sync::RwLock;

use crate::traits::Prompter;
use crate::types::Notice;

// ===== 工厂方法 =====

/// `{id:1, nombre:"Acme", titular:"Acme Corp", numero_registro:"REG-001", ...}`
pub fn acme() -> Marca {
    Marca {
        id: MarcaId(1),
        name: "Acme".to_string(),
        holder: "Acme Corp".to_string(),
        registration_number: "REG-001".to_string(),
        category: Category::Technology,
        description: None,
        status: MarcaStatus::Active,
        registered_at: None,
    }
}

pub fn rejected(status: u16, detail: &str) -> ClientError {
    ClientError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

pub fn unreachable() -> ClientError {
    ClientError::NetworkError {
        detail: "connection refused".to_string(),
    }
}

// ===== MockApi =====

/// 记录每次调用的假服务
pub struct MockApi {
    list_result: RwLock<Result<Vec<Marca>, ClientError>>,
    search_result: RwLock<Result<Vec<Marca>, ClientError>>,
    /// 如果 Some，create / update 返回此错误
    save_error: RwLock<Option<ClientError>>,
    /// 如果 Some，delete 返回此错误
    delete_error: RwLock<Option<ClientError>>,
    next_id: RwLock<i64>,
    calls: RwLock<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            list_result: RwLock::new(Ok(Vec::new())),
            search_result: RwLock::new(Ok(Vec::new())),
            save_error: RwLock::new(None),
            delete_error: RwLock::new(None),
            next_id: RwLock::new(100),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_list(&self, result: Result<Vec<Marca>, ClientError>) {
        *self.list_result.write().await = result;
    }

    pub async fn set_search(&self, result: Result<Vec<Marca>, ClientError>) {
        *self.search_result.write().await = result;
    }

    pub async fn set_save_error(&self, err: Option<ClientError>) {
        *self.save_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<ClientError>) {
        *self.delete_error.write().await = err;
    }

    /// 已发出的请求（"list"、"search {term}"、"create {numero}"、"update {id}"、"delete {id}"）
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.write().await.push(call);
    }

    async fn saved(&self, id: Option<MarcaId>, payload: &MarcaPayload) -> Result<Marca, ClientError> {
        if let Some(err) = self.save_error.read().await.clone() {
            return Err(err);
        }
        let id = match id {
            Some(id) => id,
            None => {
                let mut next = self.next_id.write().await;
                *next += 1;
                MarcaId(*next)
            }
        };
        Ok(Marca {
            id,
            name: payload.name.clone(),
            holder: payload.holder.clone(),
            registration_number: payload.registration_number.clone(),
            category: payload.category,
            description: Some(payload.description.clone()),
            status: payload.status,
            registered_at: None,
        })
    }
}

#[async_trait]
impl MarcaApi for MockApi {
    async fn list(&self) -> Result<Vec<Marca>, ClientError> {
        self.record("list".to_string()).await;
        self.list_result.read().await.clone()
    }

    async fn search(&self, term: &str) -> Result<Vec<Marca>, ClientError> {
        self.record(format!("search {term}")).await;
        self.search_result.read().await.clone()
    }

    async fn create(&self, payload: &MarcaPayload) -> Result<Marca, ClientError> {
        self.record(format!("create {}", payload.registration_number))
            .await;
        self.saved(None, payload).await
    }

    async fn update(&self, id: MarcaId, payload: &MarcaPayload) -> Result<Marca, ClientError> {
        self.record(format!("update {id}")).await;
        self.saved(Some(id), payload).await
    }

    async fn delete(&self, id: MarcaId) -> Result<(), ClientError> {
        self.record(format!("delete {id}")).await;
        match self.delete_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ===== MockPrompter =====

/// 固定应答的用户交互
pub struct MockPrompter {
    answer: bool,
    confirmations: RwLock<Vec<String>>,
    alerts: RwLock<Vec<Notice>>,
}

impl MockPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: RwLock::new(Vec::new()),
            alerts: RwLock::new(Vec::new()),
        }
    }

    pub async fn confirmations(&self) -> Vec<String> {
        self.confirmations.read().await.clone()
    }

    pub async fn alerts(&self) -> Vec<Notice> {
        self.alerts.read().await.clone()
    }
}

#[async_trait]
impl Prompter for MockPrompter {
    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.write().await.push(message.to_string());
        self.answer
    }

    async fn alert(&self, notice: &Notice) {
        self.alerts.write().await.push(notice.clone());
    }
}
