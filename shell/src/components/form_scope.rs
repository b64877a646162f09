//! Shared form-coordination scope.

use leptos::prelude::*;

use crate::state::form_scope::FormRegistry;

/// Provide one [`FormRegistry`] to every form rendered inside `children`.
#[component]
pub fn FormScope(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(FormRegistry::default()));
    children()
}

/// Registry of the nearest enclosing [`FormScope`].
///
/// # Panics
///
/// Panics when called outside a `FormScope`.
pub fn use_form_scope() -> RwSignal<FormRegistry> {
    expect_context::<RwSignal<FormRegistry>>()
}
