pub mod chinese;
pub mod japanese;
pub mod korean;
