//! Layout Component
//!
//! Page container with the app's fixed typography and spacing.

use leptos::*;

/// Font stack applied to everything inside the layout
pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Padding around the layout content
pub const PADDING: &str = "20px";

/// Inline style of the layout container
pub fn layout_style() -> String {
    format!("font-family: {}; padding: {};", FONT_FAMILY, PADDING)
}

/// Wraps its children in a styled container, leaving them untouched
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout" style=layout_style()>
            {children()}
        </div>
    }
}
