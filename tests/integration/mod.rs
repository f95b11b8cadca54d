//! Integration tests against a running router

pub mod chat;
pub mod database;
