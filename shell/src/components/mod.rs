//! Shell components and the widget collaborators they mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app_shell` owns the composition decisions. The remaining modules are the
//! region widgets; each one reads only the props it is handed.

pub mod app_shell;
pub mod breadcrumbs;
pub mod form_scope;
pub mod loader;
pub mod main_footer;
pub mod main_menu;
pub mod sider_panel;
