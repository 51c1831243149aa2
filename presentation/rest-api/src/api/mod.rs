pub mod decimal;
pub mod error;
pub mod health;
pub mod item;
pub mod recipe;
pub mod security;
pub mod session;
pub mod tags;
pub mod user;
