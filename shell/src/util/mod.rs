//! Reactive helpers shared by the shell components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate router and browser concerns (query string, timers)
//! from the composition components so the decision logic stays testable.

pub mod auth_gate;
pub mod query_mode;
