//! Placeholder rendered when the store flags the route as missing.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Sorry, the page you visited does not exist."</p>
            <a href="/" class="btn">"Back Home"</a>
        </div>
    }
}
