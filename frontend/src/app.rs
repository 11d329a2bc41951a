//! App Root Component

use leptos::*;

use crate::pages::Home;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! { <Home /> }
}
