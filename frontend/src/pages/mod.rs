//! Pages
//!
//! Top-level screens.

pub mod home;

pub use home::Home;
