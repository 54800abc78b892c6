pub mod api;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
