pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod run;
pub mod signal;
pub mod today;
