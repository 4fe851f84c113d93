/// API route modules
pub mod health;
pub mod multipart;
pub mod users;
