//! # marcas-client
//!
//! Typed client for the trademark registration ("marcas") REST service.
//!
//! ## Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | list      | `GET /marcas/` | `200` + `[Marca]` |
//! | search    | `GET /marcas/buscar/{term}` (term percent-encoded) | `200` + `[Marca]` |
//! | create    | `POST /marcas/` + [`MarcaPayload`] | `200`/`201` + `Marca` |
//! | update    | `PUT /marcas/{id}` + [`MarcaPayload`] | `200` + `Marca` |
//! | delete    | `DELETE /marcas/{id}` | `200`/`204` |
//!
//! Non-success responses carry `{"detail": "..."}`, surfaced verbatim in
//! [`ClientError::Rejected`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use marcas_client::{ClientConfig, HttpMarcaClient, MarcaApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpMarcaClient::new(&ClientConfig::new("http://localhost:8000"))?;
//!
//!     for marca in client.search("acme").await? {
//!         println!("{} {} ({})", marca.id, marca.name, marca.status.name());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: service unreachable
//! - [`ClientError::Rejected`]: non-success HTTP status, with the service's detail
//! - [`ClientError::ParseError`]: unexpected response body
//!
//! Requests are never retried.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, HttpMarcaClient};
pub use error::{ClientError, Result};
pub use traits::MarcaApi;
pub use types::{Category, Marca, MarcaId, MarcaPayload, MarcaStatus};

pub use utils::datetime;
