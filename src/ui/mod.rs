//! Terminal user interface

pub mod render;
pub mod terminal;
