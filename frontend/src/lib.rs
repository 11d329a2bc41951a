//! Sample Project Frontend
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It renders a single page that fetches `/api/data` from the backend and
//! pretty-prints the JSON it gets back.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

pub use app::App;
