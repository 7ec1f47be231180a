pub mod config;
pub mod count;
pub mod export;
pub mod init;
pub mod report;
pub mod shell;
