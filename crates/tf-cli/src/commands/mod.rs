pub mod attach;
pub mod comment;
pub mod dispatch;
pub mod init;
pub mod shared;
pub mod stats;
pub mod task;
pub mod user;
pub mod whoami;
