//! Primary navigation menu.

#[cfg(test)]
#[path = "main_menu_test.rs"]
mod main_menu_test;

use leptos::prelude::*;

use crate::state::app_model::{ApplicationState, MenuItem};
use crate::state::auth::AuthState;
use crate::state::loading::{LoadingState, MENU_SPIN_EFFECTS};

/// Collapsed and expanded widths of the menu, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuDims {
    pub min: u32,
    pub max: u32,
}

impl Default for MenuDims {
    fn default() -> Self {
        Self { min: 80, max: 250 }
    }
}

/// Props contract of the primary menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuProps {
    pub items: Vec<MenuItem>,
    pub collapsed: bool,
    /// Spinner while the app query or a sign-in is in flight.
    pub spinning: bool,
    pub user_name: Option<String>,
    pub dims: MenuDims,
    pub is_sider: bool,
    pub show_logo: bool,
    pub class: &'static str,
}

impl MenuProps {
    #[must_use]
    pub fn from_state(app: &ApplicationState, auth: &AuthState, loading: &LoadingState) -> Self {
        Self {
            items: app.menus.clone(),
            collapsed: app.collapsed_menu,
            spinning: loading.any_busy(&MENU_SPIN_EFFECTS),
            user_name: auth.user.as_ref().and_then(|u| u.name().map(str::to_owned)),
            dims: MenuDims::default(),
            is_sider: true,
            show_logo: true,
            class: "appMenu",
        }
    }

    /// Current width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        if self.collapsed { self.dims.min } else { self.dims.max }
    }
}

/// Menu region. Entry clicks are reported through `on_route`; navigation
/// itself follows the entry's `href`.
#[component]
pub fn MainMenu(
    #[prop(into)] props: Signal<MenuProps>,
    on_collapse: Callback<()>,
    on_route: Callback<MenuItem>,
) -> impl IntoView {
    let menu_class = props.with_untracked(|p| format!("main-menu {}", p.class));
    let collapsed = move || props.with(|p| p.collapsed);
    let width = move || format!("{}px", props.with(MenuProps::width));

    view! {
        <nav
            class=menu_class
            class:main-menu--sider=move || props.with(|p| p.is_sider)
            class:main-menu--collapsed=collapsed
            style:width=width
        >
            <Show when=move || props.with(|p| p.show_logo)>
                <div class="main-menu__logo">"\u{25A3}"</div>
            </Show>
            <Show when=move || props.with(|p| p.spinning)>
                <span class="main-menu__spinner" aria-busy="true"></span>
            </Show>
            {move || menu_entries(props.with(|p| p.items.clone()), on_route)}
            <div class="main-menu__spacer"></div>
            {move || props.with(|p| p.user_name.clone()).map(|name| view! { <span class="main-menu__user">{name}</span> })}
            <button class="main-menu__toggle" on:click=move |_| on_collapse.run(())>
                {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
            </button>
        </nav>
    }
}

fn menu_entries(items: Vec<MenuItem>, on_route: Callback<MenuItem>) -> AnyView {
    view! {
        <ul class="main-menu__list">
            {items
                .into_iter()
                .map(|item| {
                    let href = item.path.clone().unwrap_or_else(|| format!("/{}", item.key));
                    let label = item.label.clone();
                    let children = item.children.clone();
                    let clicked = item.clone();
                    view! {
                        <li class="main-menu__item">
                            <a href=href on:click=move |_| on_route.run(clicked.clone())>
                                {label}
                            </a>
                            {(!children.is_empty()).then(|| menu_entries(children, on_route))}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
