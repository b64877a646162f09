//! Side-panel configuration and its resolution into sider props.
//!
//! DESIGN
//! ======
//! The external store publishes panels as a flat map keyed by panel id plus a
//! `currentPanel` pointer that may dangle. [`SiderPanels::resolve`] is total:
//! it never indexes an absent key and collapses every degenerate case into
//! [`SiderPanel::None`], which the sider renders as an empty panel.

#[cfg(test)]
#[path = "sider_test.rs"]
mod sider_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key reserved for the close callback; stripped from panel props.
pub const ON_CLOSE_KEY: &str = "onClose";

/// Panel-specific props as published by the store.
pub type PanelProps = Map<String, Value>;

/// Side-panel configuration: the selected panel id plus every known panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiderPanels {
    #[serde(rename = "currentPanel")]
    pub current_panel: Option<String>,
    #[serde(flatten)]
    pub panels: BTreeMap<String, Value>,
}

/// Resolved selection for the sider region.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SiderPanel {
    /// No panel selected, or the selection does not resolve.
    #[default]
    None,
    Selected { key: String, props: PanelProps },
}

impl SiderPanels {
    /// Resolve `current_panel` against the known panels.
    #[must_use]
    pub fn resolve(&self) -> SiderPanel {
        let Some(key) = self.current_panel.as_deref() else {
            return SiderPanel::None;
        };
        match self.panels.get(key) {
            Some(Value::Object(props)) => {
                let mut props = props.clone();
                props.remove(ON_CLOSE_KEY);
                SiderPanel::Selected { key: key.to_owned(), props }
            }
            _ => SiderPanel::None,
        }
    }
}

impl SiderPanel {
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Selected { key, .. } => Some(key),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Panel props, empty when nothing is selected.
    #[must_use]
    pub fn props(&self) -> PanelProps {
        match self {
            Self::None => PanelProps::new(),
            Self::Selected { props, .. } => props.clone(),
        }
    }
}

/// Props handed to the sider region: the resolved panel merged with the close
/// callback. The callback is a separate field, so it always wins over any
/// same-named panel prop.
#[derive(Clone, Debug)]
pub struct SiderProps<C> {
    pub panel: SiderPanel,
    pub on_close: C,
}

/// Resolve the sider props for the current panel configuration.
pub fn resolve_sider_props<C>(panels: &SiderPanels, on_close: C) -> SiderProps<C> {
    SiderProps { panel: panels.resolve(), on_close }
}
