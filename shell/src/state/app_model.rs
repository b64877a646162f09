//! Application model: locale, menus, document meta, layout toggles, and
//! side-panel configuration.

#[cfg(test)]
#[path = "app_model_test.rs"]
mod app_model_test;

use serde::{Deserialize, Serialize};

use super::StateError;
use super::sider::SiderPanels;

/// Default locale when the bootstrap document omits one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default auth poll period in milliseconds.
pub const DEFAULT_WAIT_BEFORE_LOGIN_MS: u32 = 1000;

/// Application state as published by the external store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationState {
    /// Forces the not-found placeholder in place of routed content.
    #[serde(rename = "is404")]
    pub is_404: bool,
    /// Locale identifier. Also the structural remount key of the shell.
    pub language: String,
    pub menus: Vec<MenuItem>,
    pub collapsed_menu: bool,
    pub meta: DocumentMeta,
    pub layout_opts: LayoutOpts,
    /// Auth poll period in milliseconds.
    pub wait_before_login: u32,
    pub sider_panels: SiderPanels,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            is_404: false,
            language: DEFAULT_LANGUAGE.to_owned(),
            menus: Vec::new(),
            collapsed_menu: false,
            meta: DocumentMeta::default(),
            layout_opts: LayoutOpts::default(),
            wait_before_login: DEFAULT_WAIT_BEFORE_LOGIN_MS,
            sider_panels: SiderPanels::default(),
        }
    }
}

impl ApplicationState {
    /// Decode a bootstrap document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Decode`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        serde_json::from_str(raw).map_err(StateError::decode("application"))
    }
}

/// Independent region toggles. Any subset may be active at once.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOpts {
    pub main_menu: bool,
    /// Carried for the external store; the shell renders no header region.
    pub main_header: bool,
    pub main_footer: bool,
    pub page_breadcrumbs: bool,
}

/// Values injected into the document head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMeta {
    pub char_set: String,
    pub name: String,
    pub title: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self { char_set: "utf-8".to_owned(), name: String::new(), title: String::new() }
    }
}

impl DocumentMeta {
    /// Document title: application name and page title joined by one space.
    #[must_use]
    pub fn document_title(&self) -> String {
        format!("{} {}", self.name, self.title)
    }
}

/// One entry of the primary menu. Nested entries render as submenus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub children: Vec<MenuItem>,
}
