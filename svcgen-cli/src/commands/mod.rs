pub mod diff;
pub mod generate;
pub mod init;
pub mod status;
