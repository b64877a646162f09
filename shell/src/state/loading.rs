//! Busy flags for named asynchronous effects.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::StateError;

/// Application bootstrap query. Drives the shell's full-screen loader.
pub const APP_QUERY_EFFECT: &str = "appModel/query";

/// Sign-in request issued by the auth store.
pub const SIGN_IN_EFFECT: &str = "authModel/signIn";

/// Effects the primary menu shows a spinner for.
pub const MENU_SPIN_EFFECTS: [&str; 2] = [APP_QUERY_EFFECT, SIGN_IN_EFFECT];

/// Effects the landing page spinner around the whole shell waits on.
pub const LANDING_SPIN_EFFECTS: [&str; 2] = [APP_QUERY_EFFECT, SIGN_IN_EFFECT];

/// Sparse map of effect name to busy flag. Missing effects are not busy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingState {
    pub effects: BTreeMap<String, bool>,
}

impl LoadingState {
    /// Decode a bootstrap document.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Decode`] if `raw` does not match the model shape.
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        serde_json::from_str(raw).map_err(StateError::decode("loading"))
    }

    #[must_use]
    pub fn is_busy(&self, effect: &str) -> bool {
        self.effects.get(effect).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn any_busy(&self, effects: &[&str]) -> bool {
        effects.iter().any(|effect| self.is_busy(effect))
    }

    /// Whether the shell's suspension fallback should spin. Only the
    /// application query counts.
    #[must_use]
    pub fn shell_fallback_spinning(&self) -> bool {
        self.is_busy(APP_QUERY_EFFECT)
    }

    /// Whether the page-level landing spinner should spin.
    #[must_use]
    pub fn landing_spinning(&self) -> bool {
        self.any_busy(&LANDING_SPIN_EFFECTS)
    }

    pub fn set_busy(&mut self, effect: &str, busy: bool) {
        self.effects.insert(effect.to_owned(), busy);
    }
}
