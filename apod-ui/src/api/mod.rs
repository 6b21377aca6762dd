//! API Client
//!
//! Communication with the APOD viewer server.

pub mod client;

pub use client::*;
