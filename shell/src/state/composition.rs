//! Region composition decisions for the application shell.
//!
//! DESIGN
//! ======
//! Every structural choice the shell makes is a pure function of the layout
//! toggles, the 404 flag and the query override, so the rendering component
//! only has to follow [`ShellComposition`].

#[cfg(test)]
#[path = "composition_test.rs"]
mod composition_test;

use super::app_model::LayoutOpts;

/// What fills the content slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutletKind {
    Routed,
    NotFound,
}

/// Structural regions of the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    Menu,
    Breadcrumbs,
    Sider,
    Footer,
}

/// Regions and outlet for one render of the shell.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellComposition {
    pub menu: bool,
    /// Mirrors `layoutOpts.mainHeader`; no header region is rendered.
    pub header: bool,
    pub breadcrumbs: bool,
    /// The sider is always mounted, with or without a selected panel.
    pub sider: bool,
    pub footer: bool,
    pub outlet: OutletKind,
}

impl ShellComposition {
    /// Decide regions and outlet.
    ///
    /// Breadcrumbs need both the layout flag and a non-sign-in override. The
    /// outlet depends on `is_404` alone.
    #[must_use]
    pub fn decide(layout: LayoutOpts, is_404: bool, sign_in_mode: bool) -> Self {
        Self {
            menu: layout.main_menu,
            header: layout.main_header,
            breadcrumbs: layout.page_breadcrumbs && !sign_in_mode,
            sider: true,
            footer: layout.main_footer,
            outlet: if is_404 { OutletKind::NotFound } else { OutletKind::Routed },
        }
    }

    /// Rendered regions, in document order.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        [
            (self.menu, Region::Menu),
            (self.breadcrumbs, Region::Breadcrumbs),
            (self.sider, Region::Sider),
            (self.footer, Region::Footer),
        ]
        .into_iter()
        .filter_map(|(present, region)| present.then_some(region))
        .collect()
    }
}

/// Identity of the shell's structural subtree.
///
/// A new generation means teardown and recreation of every child, not an
/// in-place update. Only a locale change produces one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuralIdentity {
    pub locale: String,
    pub generation: u64,
}

impl StructuralIdentity {
    #[must_use]
    pub fn initial(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), generation: 0 }
    }

    /// Identity for `locale`: the same identity when the locale is unchanged,
    /// otherwise the next generation.
    #[must_use]
    pub fn for_locale(&self, locale: &str) -> Self {
        if self.locale == locale {
            self.clone()
        } else {
            Self { locale: locale.to_owned(), generation: self.generation + 1 }
        }
    }

    #[must_use]
    pub fn requires_remount(&self, next: &Self) -> bool {
        self.generation != next.generation
    }
}

/// Whether the auth-loader flag may replace the shell with a wait overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthOverlayPolicy {
    /// The flag is published but never affects rendering.
    #[default]
    Inert,
    /// Show the login wait overlay while the flag is set.
    BlockWhileLoading,
}

impl AuthOverlayPolicy {
    #[must_use]
    pub fn shows_overlay(self, auth_loader: bool) -> bool {
        match self {
            Self::Inert => false,
            Self::BlockWhileLoading => auth_loader,
        }
    }
}
