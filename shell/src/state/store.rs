//! Read-only store interface injected into the shell.
//!
//! DESIGN
//! ======
//! The external store owns and mutates every model. The shell receives them
//! as read-only signals and subscribes through narrow selectors, so a change
//! to one field only re-runs the views that read it. Writes flow back only
//! through [`ShellCallbacks`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::app_model::{ApplicationState, DocumentMeta, LayoutOpts, MenuItem};
use super::auth::{AuthState, UserId};
use super::loading::LoadingState;
use super::sider::SiderPanels;

/// Read-only view of the application, auth and loading models.
#[derive(Clone, Copy)]
pub struct ShellStore {
    app: Signal<ApplicationState>,
    auth: Signal<AuthState>,
    loading: Signal<LoadingState>,
}

impl ShellStore {
    pub fn new(
        app: impl Into<Signal<ApplicationState>>,
        auth: impl Into<Signal<AuthState>>,
        loading: impl Into<Signal<LoadingState>>,
    ) -> Self {
        Self { app: app.into(), auth: auth.into(), loading: loading.into() }
    }

    pub fn app(&self) -> Signal<ApplicationState> {
        self.app
    }

    pub fn auth(&self) -> Signal<AuthState> {
        self.auth
    }

    pub fn loading(&self) -> Signal<LoadingState> {
        self.loading
    }

    pub fn is_404(&self) -> Memo<bool> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.is_404))
    }

    pub fn language(&self) -> Memo<String> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.language.clone()))
    }

    pub fn layout(&self) -> Memo<LayoutOpts> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.layout_opts))
    }

    pub fn meta(&self) -> Memo<DocumentMeta> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.meta.clone()))
    }

    pub fn wait_before_login(&self) -> Memo<u32> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.wait_before_login))
    }

    pub fn sider_panels(&self) -> Memo<SiderPanels> {
        let app = self.app;
        Memo::new(move |_| app.with(|a| a.sider_panels.clone()))
    }

    /// Identity of the current user, keyed on [`UserRecord::id`](super::auth::UserRecord::id). Attribute
    /// edits on the same user do not notify; sign-in, sign-out and a switch to
    /// another id do.
    pub fn user_id(&self) -> Memo<Option<UserId>> {
        let auth = self.auth;
        Memo::new(move |_| auth.with(|a| a.user.as_ref().map(|u| u.id.clone())))
    }

    /// Whether the page-level landing spinner around the shell spins.
    pub fn landing_spinning(&self) -> Memo<bool> {
        let loading = self.loading;
        Memo::new(move |_| loading.with(LoadingState::landing_spinning))
    }

    /// Whether the shell's suspension fallback spins.
    pub fn fallback_spinning(&self) -> Memo<bool> {
        let loading = self.loading;
        Memo::new(move |_| loading.with(LoadingState::shell_fallback_spinning))
    }
}

/// Callbacks owned by the external store. The shell invokes them but never
/// implements them.
#[derive(Clone, Copy)]
pub struct ShellCallbacks {
    pub on_toggle_menu: Callback<()>,
    pub on_update_404: Callback<bool>,
    pub on_update_document_meta: Callback<DocumentMeta>,
    pub on_route: Callback<MenuItem>,
    pub on_close_sider_panel: Callback<()>,
}

impl Default for ShellCallbacks {
    fn default() -> Self {
        Self {
            on_toggle_menu: Callback::new(|()| {}),
            on_update_404: Callback::new(|_: bool| {}),
            on_update_document_meta: Callback::new(|_: DocumentMeta| {}),
            on_route: Callback::new(|_: MenuItem| {}),
            on_close_sider_panel: Callback::new(|()| {}),
        }
    }
}
