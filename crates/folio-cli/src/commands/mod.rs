pub mod content;
pub mod init;
pub mod run;
