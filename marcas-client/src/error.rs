use serde::{Deserialize, Serialize};

/// Unified error type for every call made against the marcas service.
///
/// All variants are serializable for structured error reporting. Nothing is
/// retried automatically: the caller decides what to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Only possible when a request timeout has been configured.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service answered with a non-success HTTP status.
    ///
    /// `detail` carries the `{"detail": "..."}` message of the response body
    /// verbatim when the service sent one.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Service-provided error message, if available.
        detail: Option<String>,
    },

    /// Failed to parse the service's response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be built (bad base URL, TLS backend failure, ...).
    InvalidConfig {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl ClientError {
    /// 是否为传输层错误（服务不可达、超时）
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// 是否为预期行为（业务校验被服务拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if (400..500).contains(status))
    }

    /// 服务返回的错误详情（如有）
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Rejected { status, detail } => {
                if let Some(msg) = detail {
                    write!(f, "Rejected by service (HTTP {status}): {msg}")
                } else {
                    write!(f, "Rejected by service (HTTP {status})")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
