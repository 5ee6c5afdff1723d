pub mod init;
pub mod measure;
pub mod replay;
