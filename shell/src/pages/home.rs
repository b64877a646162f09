//! Landing page of the demo app: a search form registered in the shell's
//! form scope and a sign-in toggle that drives the auth store.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::form_scope::use_form_scope;
use crate::state::auth::{AuthState, UserRecord};

/// Form name shared with breadcrumb-level controls.
pub const SEARCH_FORM: &str = "search";

/// Demo user installed by the sign-in toggle.
#[must_use]
pub fn demo_user() -> UserRecord {
    let mut user = UserRecord::new(1_i64);
    user.attributes.insert("name".to_owned(), Value::from("Demo User"));
    user
}

/// Next auth state for the sign-in toggle.
#[must_use]
pub fn toggle_demo_user(state: &AuthState) -> AuthState {
    AuthState { user: if state.user.is_some() { None } else { Some(demo_user()) } }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let forms = use_form_scope();
    forms.update(|f| {
        f.register(SEARCH_FORM);
    });
    on_cleanup(move || {
        forms.update(|f| {
            f.unregister(SEARCH_FORM);
        });
    });

    let query = move || {
        forms.with(|f| {
            f.fields(SEARCH_FORM)
                .and_then(|fields| fields.get("q"))
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_default()
        })
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        forms.update(|f| {
            if let Err(e) = f.set_field(SEARCH_FORM, "q", Value::from(value)) {
                leptos::logging::warn!("search form: {e}");
            }
        });
    };

    let signed_in = move || auth.with(AuthState::is_authenticated);

    view! {
        <div class="home-page">
            <h1>"Dashboard"</h1>
            <form class="home-page__search" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <input class="home-page__input" type="search" placeholder="Search" prop:value=query on:input=on_input/>
            </form>
            <button class="btn" on:click=move |_| auth.update(|a| *a = toggle_demo_user(a))>
                {move || if signed_in() { "Sign out" } else { "Sign in" }}
            </button>
        </div>
    }
}
