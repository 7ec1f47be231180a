pub mod colors;
pub mod logger;
pub mod path;
pub mod table;
pub mod time;
