//! Interactive translation session: input state, debounce and dispatch

pub mod controller;
pub mod state;

pub use controller::{Session, SessionSettings};
pub use state::{InputEvent, SessionState};
