//! Field-level validation for column data.
//!
//! Errors are reported as a map of field name to messages, e.g.
//! `{"content": ["is too long (maximum is 255 characters)"]}`.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

pub const MAX_CONTENT_LENGTH: u64 = 255;

/// Field name → human readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: &str, message: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.to_owned(), vec![message.to_owned()]);
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        Self(map)
    }
}

/// The persisted fields of a datum, checked before every save.
#[derive(Debug, Validate)]
pub struct DatumContent {
    #[validate(length(max = MAX_CONTENT_LENGTH, message = "is too long (maximum is 255 characters)"))]
    pub content: String,
}

pub fn validate_content(content: &str) -> Result<(), FieldErrors> {
    DatumContent {
        content: content.to_owned(),
    }
    .validate()
    .map_err(|e| FieldErrors::from(&e))
}

/// Absent, empty, or whitespace-only.
pub fn is_blank(content: Option<&str>) -> bool {
    content.is_none_or(|c| c.trim().is_empty())
}
