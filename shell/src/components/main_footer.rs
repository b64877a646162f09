use leptos::prelude::*;

/// Footer region.
#[component]
pub fn MainFooter(children: Children) -> impl IntoView {
    view! { <footer class="main-footer">{children()}</footer> }
}
