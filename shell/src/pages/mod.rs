//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render inside the shell's content slot and reach shared state
//! through context; the shell decides whether they are shown at all.

pub mod home;
pub mod not_found;
