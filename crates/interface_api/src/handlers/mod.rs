//! Request handlers for each domain

pub mod chat;
pub mod claims;
pub mod health;
pub mod items;
pub mod matching;
pub mod notifications;
pub mod users;
