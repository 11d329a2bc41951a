//! Display State
//!
//! What the home screen shows below its heading: nothing yet, the payload
//! from `/api/data`, or the reason fetching it failed.

use serde_json::Value;

/// Render input of the home screen.
///
/// Starts as `Loading` and settles exactly once, into `Loaded` or `Errored`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayState {
    /// Request still outstanding
    #[default]
    Loading,
    /// Parsed response body
    Loaded(Value),
    /// String form of the network or parse failure
    Errored(String),
}

impl DisplayState {
    /// Record the outcome of the fetch.
    ///
    /// Returns `false` and leaves the state alone if it has already settled.
    pub fn settle(&mut self, result: Result<Value, String>) -> bool {
        if self.is_settled() {
            return false;
        }

        *self = match result {
            Ok(payload) => DisplayState::Loaded(payload),
            Err(message) => DisplayState::Errored(message),
        };
        true
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, DisplayState::Loading)
    }

    /// JSON value shown on screen. Errors are shown as `{"error": message}`.
    pub fn to_json(&self) -> Value {
        match self {
            DisplayState::Loading => Value::Null,
            DisplayState::Loaded(payload) => payload.clone(),
            DisplayState::Errored(message) => serde_json::json!({ "error": message }),
        }
    }

    /// Pretty-printed [`to_json`](Self::to_json), two-space indented
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| "null".to_string())
    }
}
