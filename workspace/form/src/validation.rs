use common::{Field, Selection};
use std::collections::BTreeMap;

/// Outcome of validating a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub valid: bool,
    /// One message per failing field
    pub field_errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn for_selection(selection: &Selection) -> Self {
        let field_errors = selection.field_errors();
        Self {
            valid: field_errors.is_empty(),
            field_errors,
        }
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}
