//! 界面状态

mod form;
mod modal;
mod records;
mod search;

pub use form::FormState;
pub use modal::{Modal, ModalState};
pub use records::RecordsState;
pub use search::SearchState;
