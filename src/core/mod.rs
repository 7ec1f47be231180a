pub mod export;
pub mod report;
pub mod shell;

pub use export::ExportLogic;
pub use report::Report;
pub use shell::Shell;
