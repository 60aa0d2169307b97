//! HTTP API over the translation client

pub mod api;
