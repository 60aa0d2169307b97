//! Core translation engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod languages;
pub mod messages;
pub mod models;
