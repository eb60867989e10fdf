//! Field → message results of a validation pass

use crate::state::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single failing field and the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Messages for the fields failing the most recent pass, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub(crate) fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn to_errors(&self) -> Vec<FieldValidationError> {
        self.iter()
            .map(|(field, message)| FieldValidationError {
                field,
                message: message.to_string(),
            })
            .collect()
    }
}

impl FromIterator<FieldValidationError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for error in iter {
            map.insert(error.field, error.message);
        }
        map
    }
}
