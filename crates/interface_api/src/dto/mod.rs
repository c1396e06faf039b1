//! Request/Response data transfer objects

pub mod chat;
pub mod claims;
pub mod items;
pub mod matching;
pub mod notifications;
pub mod users;
