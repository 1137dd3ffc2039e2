//! Domain layer - core entities shared by forms, API client and guard.

pub mod phone;
pub mod user;

pub use phone::Phone;
pub use user::{User, UserRole};
