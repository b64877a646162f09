//! Root application component with routing and the shell's store contexts.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::StateError;
use crate::state::app_model::{ApplicationState, DocumentMeta, MenuItem};
use crate::state::auth::AuthState;
use crate::state::loading::LoadingState;
use crate::state::store::{ShellCallbacks, ShellStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Bundled bootstrap documents, decoded when the app mounts.
pub const APP_BOOTSTRAP: &str = include_str!("../bootstrap/app_model.json");
pub const AUTH_BOOTSTRAP: &str = include_str!("../bootstrap/auth.json");
pub const LOADING_BOOTSTRAP: &str = include_str!("../bootstrap/loading.json");

/// Initial application state until the external store publishes its own.
#[must_use]
pub fn initial_app_state() -> ApplicationState {
    decoded_or_default(ApplicationState::from_json(APP_BOOTSTRAP))
}

#[must_use]
pub fn initial_auth_state() -> AuthState {
    decoded_or_default(AuthState::from_json(AUTH_BOOTSTRAP))
}

#[must_use]
pub fn initial_loading_state() -> LoadingState {
    decoded_or_default(LoadingState::from_json(LOADING_BOOTSTRAP))
}

/// Decoded model, or the model's defaults when its document is unusable.
fn decoded_or_default<T: Default>(decoded: Result<T, StateError>) -> T {
    decoded.unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; starting from defaults");
        T::default()
    })
}

/// Store callbacks backed by the app's own state signal.
pub fn store_callbacks(app: RwSignal<ApplicationState>) -> ShellCallbacks {
    ShellCallbacks {
        on_toggle_menu: Callback::new(move |()| app.update(|a| a.collapsed_menu = !a.collapsed_menu)),
        on_update_404: Callback::new(move |flag: bool| app.update(|a| a.is_404 = flag)),
        on_update_document_meta: Callback::new(move |meta: DocumentMeta| app.update(|a| a.meta = meta)),
        on_route: Callback::new(move |item: MenuItem| {
            app.update(|a| {
                a.is_404 = false;
                a.meta.title = item.label;
            });
        }),
        on_close_sider_panel: Callback::new(move |()| app.update(|a| a.sider_panels.current_panel = None)),
    }
}

/// Root application component.
///
/// Owns the application, auth and loading models, hands them to the shell as
/// a read-only store, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(initial_app_state());
    let auth = RwSignal::new(initial_auth_state());
    let loading = RwSignal::new(initial_loading_state());

    provide_context(auth);
    provide_context(ShellStore::new(app, auth, loading));
    provide_context(store_callbacks(app));

    view! {
        <Stylesheet id="leptos" href="/pkg/appshell.css"/>

        <Router>
            <AppShell>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </AppShell>
        </Router>
    }
}
