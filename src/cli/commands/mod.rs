pub mod audit;
mod command_result;
pub mod context;
pub mod init;
pub mod merge;
pub mod sync;

pub use command_result::{CommandResult, CommandSummary, InitSummary};
