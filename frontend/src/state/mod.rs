//! State Management

pub mod display;

pub use display::DisplayState;
