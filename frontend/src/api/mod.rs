//! Backend API access

pub mod client;

pub use client::{fetch_data, DATA_ENDPOINT};
