//! reqwest 实现的商标服务客户端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::MarcaApi;
use crate::types::{Marca, MarcaId, MarcaPayload};

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 服务根地址，例如 `http://localhost:8000`
    pub base_url: String,
    /// 请求超时；`None` 表示沿用传输层默认行为
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// 商标服务 HTTP 客户端
#[derive(Debug, Clone)]
pub struct HttpMarcaClient {
    client: Client,
    base_url: String,
}

impl HttpMarcaClient {
    /// 根据配置创建客户端
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::InvalidConfig {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        Self::with_client(client, &config.base_url)
    }

    /// 使用已有的 reqwest Client 创建（便于共享连接池）
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidConfig {
            detail: format!("Invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// 服务根地址（已去除末尾斜杠）
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求并逐条解析记录列表
    async fn get_records(&self, path: &str) -> Result<Vec<Marca>> {
        let url = self.url(path);
        let (status, text) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::ensure_success(status, &text)?;
        HttpUtils::parse_records(&text)
    }

    /// 执行带 JSON 请求体的写请求（POST / PUT）
    async fn send_json<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<Marca> {
        let url = self.url(path);
        let body_json = serde_json::to_string(body).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .client
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, text) = HttpUtils::execute_request(request, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, &text)?;
        HttpUtils::parse_json(&text)
    }
}

#[async_trait]
impl MarcaApi for HttpMarcaClient {
    async fn list(&self) -> Result<Vec<Marca>> {
        self.get_records("/marcas/").await
    }

    async fn search(&self, term: &str) -> Result<Vec<Marca>> {
        let path = format!("/marcas/buscar/{}", urlencoding::encode(term));
        self.get_records(&path).await
    }

    async fn create(&self, payload: &MarcaPayload) -> Result<Marca> {
        self.send_json(reqwest::Method::POST, "/marcas/", payload)
            .await
    }

    async fn update(&self, id: MarcaId, payload: &MarcaPayload) -> Result<Marca> {
        self.send_json(reqwest::Method::PUT, &format!("/marcas/{id}"), payload)
            .await
    }

    async fn delete(&self, id: MarcaId) -> Result<()> {
        let url = self.url(&format!("/marcas/{id}"));
        let (status, text) =
            HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url).await?;
        HttpUtils::ensure_success(status, &text)
    }
}
