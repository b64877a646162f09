//! Shell-facing state models and the read-only store that exposes them.
//!
//! DESIGN
//! ======
//! The application, auth and loading models are owned by an external store.
//! They are split by domain so each shell region depends on a small model,
//! and the `store` module hands them to components as read-only signals.

pub mod app_model;
pub mod auth;
pub mod auth_gate;
pub mod composition;
pub mod form_scope;
pub mod loading;
pub mod sider;
pub mod store;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Error returned when a bootstrap state document cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The document is not valid JSON or does not match the model shape.
    #[error("failed to decode {model} state: {source}")]
    Decode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StateError {
    pub(crate) fn decode(model: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Decode { model, source }
    }
}
