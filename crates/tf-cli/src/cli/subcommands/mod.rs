mod attach;
mod comment;
mod task;
mod user;

pub use attach::AttachCommands;
pub use comment::CommentCommands;
pub use task::TaskCommands;
pub use user::UserCommands;
