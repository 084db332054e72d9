pub mod check;
pub mod clean;
mod helper;
pub mod init;
