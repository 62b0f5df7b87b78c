pub mod homework;
pub mod notification;

pub use homework::{Homework, HomeworkStatus};
pub use notification::Notification;
