//! Application shell: composes menu, breadcrumbs, content, sider and footer
//! around routed page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the models through [`ShellStore`] and reports back through
//! [`ShellCallbacks`], both provided as context by the embedding app. Region
//! decisions come from [`ShellComposition`]; this module only renders them.
//!
//! The structural frame is rebuilt from scratch whenever the locale changes,
//! so widgets that measure layout at mount time see the new locale. Every
//! other input updates the frame in place.

#[cfg(test)]
#[path = "app_shell_test.rs"]
mod app_shell_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::form_scope::FormScope;
use crate::components::loader::{LandingPage, Loader};
use crate::components::main_footer::MainFooter;
use crate::components::main_menu::{MainMenu, MenuProps};
use crate::components::sider_panel::SiderPanel;
use crate::pages::not_found::NotFoundPage;
use crate::state::app_model::DocumentMeta;
use crate::state::auth_gate::AuthGate;
use crate::state::composition::{AuthOverlayPolicy, OutletKind, ShellComposition, StructuralIdentity};
use crate::state::sider::resolve_sider_props;
use crate::state::store::{ShellCallbacks, ShellStore};
use crate::util::auth_gate::install_auth_gate;
use crate::util::query_mode::{QueryMode, use_query_mode};

/// Application shell around `children` (the routed content).
///
/// Expects [`ShellStore`] and [`ShellCallbacks`] in context and must render
/// inside a router. Publishes the auth-loader signal as
/// `ReadSignal<AuthGate>` context; `auth_overlay` decides whether that signal
/// affects rendering.
#[component]
pub fn AppShell(#[prop(optional)] auth_overlay: AuthOverlayPolicy, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<ShellStore>();
    let mode = use_query_mode();
    let auth_gate = install_auth_gate(store, mode);
    provide_context(auth_gate);

    let meta = store.meta();
    let char_set = move || meta.with(|m| m.char_set.clone());
    let title = move || meta.with(DocumentMeta::document_title);

    let composition = shell_composition(store, mode);
    let show_overlay = Memo::new(move |_| auth_overlay.shows_overlay(auth_gate.with(AuthGate::auth_loader)));
    let landing_spinning = store.landing_spinning();
    let fallback_spinning = store.fallback_spinning();
    let content = StoredValue::new(children);

    view! {
        <Meta charset=char_set/>
        <Title text=title/>
        <LandingPage spinning=landing_spinning>
            <div class="admin">
                <Show when=move || !show_overlay.get() fallback=|| view! { <LoginWait/> }>
                    <Suspense fallback=move || view! { <Loader full_screen=true spinning=fallback_spinning/> }>
                        <LocaleFrame composition=composition content=content.get_value()/>
                    </Suspense>
                </Show>
            </div>
        </LandingPage>
    }
}

/// Region decisions for the current layout flags, 404 flag and `mode`
/// override.
pub fn shell_composition(store: ShellStore, mode: Memo<QueryMode>) -> Memo<ShellComposition> {
    let layout = store.layout();
    let is_404 = store.is_404();
    Memo::new(move |_| ShellComposition::decide(layout.get(), is_404.get(), mode.with(QueryMode::is_sign_in)))
}

/// Mount identity following `language`. Notifies only on a locale change,
/// each of which starts a new generation.
pub fn mount_identity(language: Memo<String>) -> Memo<StructuralIdentity> {
    Memo::new(move |current: Option<&StructuralIdentity>| {
        let locale = language.get();
        let Some(current) = current else {
            return StructuralIdentity::initial(locale);
        };
        let next = current.for_locale(&locale);
        if current.requires_remount(&next) {
            leptos::logging::log!("shell remount: locale={} generation={}", next.locale, next.generation);
        }
        next
    })
}

/// Rebuilds [`ShellFrame`] from scratch whenever the mount identity changes.
#[component]
fn LocaleFrame(composition: Memo<ShellComposition>, content: ChildrenFn) -> impl IntoView {
    let store = expect_context::<ShellStore>();
    let identity = mount_identity(store.language());
    let content = StoredValue::new(content);

    move || view! { <ShellFrame identity=identity.get() composition=composition content=content.get_value()/> }
}

/// Structural frame for one locale. Dropped and rebuilt on locale change.
#[component]
fn ShellFrame(identity: StructuralIdentity, composition: Memo<ShellComposition>, content: ChildrenFn) -> impl IntoView {
    let store = expect_context::<ShellStore>();
    let callbacks = expect_context::<ShellCallbacks>();

    let locale = identity.locale.clone();
    let generation = identity.generation.to_string();
    provide_context(identity);

    let app = store.app();
    let auth = store.auth();
    let loading = store.loading();
    let menu_props = Memo::new(move |_| {
        app.with(|a| auth.with(|u| loading.with(|l| MenuProps::from_state(a, u, l))))
    });

    let sider_panels = store.sider_panels();
    let on_close = callbacks.on_close_sider_panel;
    let sider = Signal::derive(move || sider_panels.with(|p| resolve_sider_props(p, on_close)));
    let meta = store.meta();

    let outlet = Memo::new(move |_| composition.get().outlet);
    let outlet_view = move || match outlet.get() {
        OutletKind::NotFound => view! { <NotFoundPage/> }.into_any(),
        OutletKind::Routed => content(),
    };

    view! {
        <div class="shell" lang=locale data-shell-mount=generation style="min-height: 100vh">
            <Show when=move || composition.get().menu>
                <MainMenu
                    props=menu_props
                    on_collapse=callbacks.on_toggle_menu
                    on_route=callbacks.on_route
                />
            </Show>
            <div class="site-layout">
                <div class="site-layout__body">
                    <main class="site-layout__main">
                        <FormScope>
                            <Show when=move || composition.get().breadcrumbs>
                                <Breadcrumbs
                                    meta=meta
                                    on_update_404=callbacks.on_update_404
                                    on_update_document_meta=callbacks.on_update_document_meta
                                />
                            </Show>
                            <div class="site-layout-content">{outlet_view}</div>
                        </FormScope>
                    </main>
                    <SiderPanel props=sider/>
                </div>
                <Show when=move || composition.get().footer>
                    <MainFooter>"Footer"</MainFooter>
                </Show>
            </div>
        </div>
    }
}

/// Overlay shown in place of the shell while the auth loader is set, under
/// [`AuthOverlayPolicy::BlockWhileLoading`].
#[component]
fn LoginWait() -> impl IntoView {
    view! { <div class="adminLoading">"login"</div> }
}
