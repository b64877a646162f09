//! Loading indicators: the page-level landing spinner and the shell's
//! suspension fallback.

use leptos::prelude::*;

/// Spinner, optionally covering the whole viewport.
#[component]
pub fn Loader(#[prop(optional)] full_screen: bool, #[prop(into)] spinning: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="loader"
            class:loader--full-screen=full_screen
            class:loader--spinning=move || spinning.get()
            role="progressbar"
            aria-busy=move || if spinning.get() { "true" } else { "false" }
        >
            <span class="loader__spinner"></span>
        </div>
    }
}

/// Page wrapper with a full-screen spinner over its children while
/// `spinning` is set. Children stay mounted underneath.
#[component]
pub fn LandingPage(#[prop(into)] spinning: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="landing" class:landing--busy=move || spinning.get()>
            <Loader full_screen=true spinning=spinning/>
            {children()}
        </div>
    }
}
