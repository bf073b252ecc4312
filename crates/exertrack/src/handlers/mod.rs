pub mod error;
pub mod exercises;
pub mod health;
pub mod logs;
pub mod pages;
pub mod users;

pub use error::AppError;
