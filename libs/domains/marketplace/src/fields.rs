//! Display rows and diff-aware formatting.

use std::fmt::Display;

/// Value of a display row. `Absent` rows are dropped before the document
/// is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    Absent,
}

/// A labelled row in the notification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Present(value.into()),
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self.value, FieldValue::Present(_))
    }

    /// The row's text, if present.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Present(text) => Some(text),
            FieldValue::Absent => None,
        }
    }
}

/// Render a value that may have changed between `old` and `new`.
///
/// Both values go through `format` and only the formatted strings are
/// compared. When they match, `base` comes back untouched; otherwise the row
/// reads `"<old> → <new>"`.
pub fn diff_field<T, F>(old: &T, new: &T, base: Field, format: F) -> Field
where
    T: ?Sized,
    F: Fn(&T) -> String,
{
    let before = format(old);
    let after = format(new);

    if before == after {
        base
    } else {
        Field {
            name: base.name,
            value: FieldValue::Present(format!("{before} → {after}")),
        }
    }
}

/// [`diff_field`] with plain `Display` formatting.
pub fn diff_field_display<T>(old: &T, new: &T, base: Field) -> Field
where
    T: Display + ?Sized,
{
    diff_field(old, new, base, |value| value.to_string())
}
