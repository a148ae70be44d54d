//! Request status banners shown above the results.

use leptos::*;

#[component]
pub fn LoadingNotice() -> impl IntoView {
    view! {
        <div class="loading-notice">
            <p>"Processing files, please wait..."</p>
        </div>
    }
}

/// Banner for a failed upload.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-label">"Error:"</span>
            " "
            {message}
        </div>
    }
}
