pub mod logs;
pub mod system;
pub mod users;
pub mod verify;
