//! Field definition normalization
//!
//! Fills unset `transforms`/`validators` with empty lists. Only the given
//! level is touched: child lists are normalized when the compiler descends
//! into them.

use crate::definition::FieldDefinition;

/// Normalized copies of `fields`; the input is left untouched
pub fn normalize(fields: &[FieldDefinition]) -> Vec<FieldDefinition> {
    fields.iter().map(FieldDefinition::normalized).collect()
}

impl FieldDefinition {
    /// This definition with `transforms` and `validators` present
    pub fn normalized(&self) -> FieldDefinition {
        let mut field = self.clone();
        field.transforms.get_or_insert_with(Vec::new);
        field.validators.get_or_insert_with(Vec::new);
        field
    }

    pub fn is_normalized(&self) -> bool {
        self.transforms.is_some() && self.validators.is_some()
    }
}
