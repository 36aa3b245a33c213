//! Marcas Core Library
//!
//! Provides the record-management logic of the trademark registration client:
//! - Record Manager (records, form draft, listing / editing mode, busy tracking)
//! - Command execution against a [`MarcaApi`] implementation
//! - A sequential [`RecordSession`] driver for scripted use
//!
//! The manager performs no I/O itself. Every network operation is returned
//! as a [`Command`]; the platform layer executes it and feeds the [`Reply`]
//! back, receiving [`Effect`]s (notices to show, follow-up commands to run).

pub mod error;
pub mod manager;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use manager::{Confirmation, Mode, RecordManager};
pub use services::{execute, RecordSession};
pub use traits::{MarcaApi, Prompter};
pub use types::{Command, Draft, DraftField, Effect, Notice, Reply, Request, Response};
