//! Networking for the external prime service.

pub mod api;
