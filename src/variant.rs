//! Variants

use serde::{Deserialize, Serialize};

/// The (color, size) pair distinguishing otherwise-identical line items.
///
/// Comparison is exact and case-sensitive. Blank values are stored as `None` so an
/// absent attribute has a single representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    color: Option<String>,
    size: Option<String>,
}

impl Variant {
    /// Create a variant from optional color and size values.
    #[must_use]
    pub fn new(color: Option<String>, size: Option<String>) -> Self {
        Self {
            color: non_blank(color),
            size: non_blank(size),
        }
    }

    /// A variant with neither color nor size.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the size, if any.
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// True when both attributes are absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.size.is_none()
    }

    /// Split into `(color, size)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.color, self.size)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
