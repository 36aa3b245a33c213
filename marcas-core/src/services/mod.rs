//! 业务逻辑服务层

mod executor;
mod record_session;

pub use executor::execute;
pub use record_session::{RecordSession, DELETE_CONFIRMATION};
