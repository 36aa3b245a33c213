//! 平台交互抽象 trait 定义

mod prompter;

pub use prompter::Prompter;

// 远端服务抽象由客户端库提供
pub use marcas_client::MarcaApi;
