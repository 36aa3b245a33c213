//! 页面视图

pub mod form;
pub mod list;
