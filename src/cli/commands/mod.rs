pub mod build;
mod command_result;
pub mod init;
pub mod reorg;
pub mod search;

pub use command_result::*;
