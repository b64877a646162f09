//! Form registry shared by breadcrumbs and routed content.
//!
//! DESIGN
//! ======
//! One registry lives at the shell's form scope. Breadcrumb-level controls
//! and page forms register here instead of per region, so a form spanning
//! both shares one set of field values.

#[cfg(test)]
#[path = "form_scope_test.rs"]
mod form_scope_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Error returned by [`FormRegistry::set_field`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormScopeError {
    #[error("form not registered: {0}")]
    UnknownForm(String),
}

/// Field values of one registered form.
pub type FormFields = BTreeMap<String, Value>;

/// Forms registered under a single scope, keyed by form name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormRegistry {
    forms: BTreeMap<String, FormFields>,
}

impl FormRegistry {
    /// Register `form`. Re-registering keeps existing field values.
    ///
    /// Returns `true` when the form was not registered before.
    pub fn register(&mut self, form: &str) -> bool {
        if self.forms.contains_key(form) {
            return false;
        }
        self.forms.insert(form.to_owned(), FormFields::new());
        true
    }

    /// Remove `form` and return its last field values.
    pub fn unregister(&mut self, form: &str) -> Option<FormFields> {
        self.forms.remove(form)
    }

    /// Write one field of a registered form.
    ///
    /// # Errors
    ///
    /// Returns [`FormScopeError::UnknownForm`] if `form` is not registered.
    pub fn set_field(&mut self, form: &str, field: &str, value: Value) -> Result<(), FormScopeError> {
        let fields = self
            .forms
            .get_mut(form)
            .ok_or_else(|| FormScopeError::UnknownForm(form.to_owned()))?;
        fields.insert(field.to_owned(), value);
        Ok(())
    }

    #[must_use]
    pub fn fields(&self, form: &str) -> Option<&FormFields> {
        self.forms.get(form)
    }
}
