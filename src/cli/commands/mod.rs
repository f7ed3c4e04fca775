pub mod clean;
mod command_result;
pub mod init;
pub mod scan;

pub use command_result::*;
