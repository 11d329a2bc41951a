//! UI Components
//!
//! Reusable Leptos components.

pub mod layout;

pub use layout::Layout;
