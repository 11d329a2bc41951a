//! Home Page
//!
//! The single screen of the app: loads `/api/data` once and shows the result.

use leptos::*;
use serde_json::Value;

use crate::api;
use crate::components::Layout;
use crate::state::DisplayState;

pub const HEADING: &str = "Sample Project";

pub const INTRO: &str =
    "This page loads JSON from the backend at /api/data and shows the response below.";

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let display = create_rw_signal(DisplayState::default());

    // One request per mount, aborted if the page goes away first
    let controller = web_sys::AbortController::new().ok();
    let abort_signal = controller.as_ref().map(|c| c.signal());

    spawn_local(async move {
        let result = api::fetch_data(abort_signal.as_ref()).await;
        let aborted = abort_signal.as_ref().is_some_and(|signal| signal.aborted());

        if let (false, Err(e)) = (aborted, &result) {
            web_sys::console::error_1(
                &format!("Failed to fetch {}: {}", api::DATA_ENDPOINT, e).into(),
            );
        }

        settle_display(display, aborted, result);
    });

    on_cleanup(move || {
        if let Some(controller) = controller {
            controller.abort();
        }
    });

    view! {
        <Layout>
            <h1>{HEADING}</h1>
            <p>{INTRO}</p>
            <pre class="display-state">{move || display.with(DisplayState::render)}</pre>
        </Layout>
    }
}

/// Apply a finished fetch to the page's state.
///
/// Nothing is written when the request was aborted or the signal has been
/// disposed with the page. Returns whether the state changed.
pub fn settle_display(
    display: RwSignal<DisplayState>,
    aborted: bool,
    result: Result<Value, String>,
) -> bool {
    if aborted {
        return false;
    }

    display
        .try_update(|state| state.settle(result))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_runtime(test: impl FnOnce()) {
        let runtime = create_runtime();
        test();
        runtime.dispose();
    }

    #[test]
    fn test_success_loads_payload() {
        with_runtime(|| {
            let display = create_rw_signal(DisplayState::default());

            assert!(settle_display(display, false, Ok(json!({"ok": true}))));
            assert_eq!(display.get_untracked(), DisplayState::Loaded(json!({"ok": true})));
        });
    }

    #[test]
    fn test_failure_is_errored() {
        with_runtime(|| {
            let display = create_rw_signal(DisplayState::default());

            assert!(settle_display(
                display,
                false,
                Err("TypeError: Failed to fetch".to_string())
            ));
            assert_eq!(
                display.get_untracked(),
                DisplayState::Errored("TypeError: Failed to fetch".to_string())
            );
        });
    }

    #[test]
    fn test_aborted_request_leaves_loading() {
        with_runtime(|| {
            let display = create_rw_signal(DisplayState::default());

            assert!(!settle_display(display, true, Err("AbortError".to_string())));
            assert!(!settle_display(display, true, Ok(json!(1))));
            assert_eq!(display.get_untracked(), DisplayState::Loading);
        });
    }

    #[test]
    fn test_disposed_signal_is_not_written() {
        with_runtime(|| {
            let display = create_rw_signal(DisplayState::default());
            display.dispose();

            assert!(!settle_display(display, false, Ok(json!({"late": true}))));
        });
    }

    #[test]
    fn test_second_result_is_ignored() {
        with_runtime(|| {
            let display = create_rw_signal(DisplayState::default());
            settle_display(display, false, Ok(json!("first")));

            assert!(!settle_display(display, false, Ok(json!("second"))));
            assert_eq!(display.get_untracked(), DisplayState::Loaded(json!("first")));
        });
    }
}
