//! `mode` query-parameter override.
//!
//! SYSTEM CONTEXT
//! ==============
//! `?mode=signIn` suppresses breadcrumbs and lets the auth poll treat the
//! session as authenticated. Matching is exact: no case folding, no trimming.

#[cfg(test)]
#[path = "query_mode_test.rs"]
mod query_mode_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Query parameter carrying the override.
pub const MODE_PARAM: &str = "mode";

/// The only recognized override value.
pub const SIGN_IN_MODE: &str = "signIn";

/// Parsed `mode` override from the current URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// No `mode` parameter.
    #[default]
    Unset,
    SignIn,
    /// Any other value, kept verbatim. A repeated parameter keeps every value.
    Other(Vec<String>),
}

impl QueryMode {
    /// Parse the override from a raw query string, with or without the
    /// leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let values: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == MODE_PARAM)
            .map(|(_, value)| value.into_owned())
            .collect();

        match values.as_slice() {
            [] => Self::Unset,
            [only] if only == SIGN_IN_MODE => Self::SignIn,
            _ => Self::Other(values),
        }
    }

    #[must_use]
    pub fn is_sign_in(&self) -> bool {
        matches!(self, Self::SignIn)
    }
}

/// Reactive override derived from the router location's query string.
pub fn use_query_mode() -> Memo<QueryMode> {
    let location = use_location();
    Memo::new(move |_| QueryMode::from_query(&location.search.get()))
}
