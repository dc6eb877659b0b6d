pub mod chat;
pub mod error;
pub mod health;
pub mod receipt;
pub mod statement;
pub mod tags;
