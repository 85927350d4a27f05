//! Request field validation.
//!
//! Request bodies deserialize into optional fields so that missing or out-of-range
//! values are reported together, per field, as a 422.

use storefront::{quantity::Quantity, tables::ProductTable, variant::Variant};
use storefront_app::domain::products::records::ProductId;

use crate::errors::{ApiError, FieldErrors};

/// Longest accepted color or size value, in characters.
pub(crate) const MAX_ATTRIBUTE_LENGTH: usize = 50;

#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: FieldErrors,
}

impl Validator {
    fn fail(&mut self, field: &str, message: String) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }

    fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.fail(field, format!("The {} field is required.", label(field)));
        }

        value
    }

    pub(crate) fn product_id(&mut self, value: Option<i64>) -> Option<ProductId> {
        let id = self.required("product_id", value)?;

        if id < 1 {
            self.fail("product_id", "The product id field must be at least 1.".to_string());

            return None;
        }

        Some(ProductId::from_i64(id))
    }

    pub(crate) fn product_table(&mut self, value: Option<&str>) -> Option<ProductTable> {
        let name = self.required("product_table", value)?;

        name.parse::<ProductTable>()
            .map_err(|_ignored| {
                self.fail(
                    "product_table",
                    "The selected product table is invalid.".to_string(),
                );
            })
            .ok()
    }

    pub(crate) fn quantity(&mut self, value: Option<i64>) -> Option<Quantity> {
        let value = self.required("quantity", value)?;

        self.bounded_quantity(value)
    }

    /// Quantity that may be omitted, falling back to `default`.
    pub(crate) fn quantity_or(&mut self, value: Option<i64>, default: Quantity) -> Option<Quantity> {
        match value {
            Some(value) => self.bounded_quantity(value),
            None => Some(default),
        }
    }

    fn bounded_quantity(&mut self, value: i64) -> Option<Quantity> {
        match Quantity::new(value) {
            Ok(quantity) => Some(quantity),
            Err(_) if value < i64::from(Quantity::MIN) => {
                self.fail(
                    "quantity",
                    format!("The quantity field must be at least {}.", Quantity::MIN),
                );

                None
            }
            Err(_) => {
                self.fail(
                    "quantity",
                    format!(
                        "The quantity field must not be greater than {}.",
                        Quantity::MAX
                    ),
                );

                None
            }
        }
    }

    /// Blank values are treated as absent.
    pub(crate) fn variant(&mut self, color: Option<String>, size: Option<String>) -> Variant {
        self.attribute("color", color.as_deref());
        self.attribute("size", size.as_deref());

        Variant::new(color, size)
    }

    fn attribute(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };

        if value.chars().count() > MAX_ATTRIBUTE_LENGTH {
            self.fail(
                field,
                format!(
                    "The {field} field must not be greater than {MAX_ATTRIBUTE_LENGTH} characters."
                ),
            );
        }

        if value.chars().any(char::is_control) {
            self.fail(field, format!("The {field} field format is invalid."));
        }
    }

    /// The validated value, or a 422 carrying every collected field error.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ApiError::validation(self.errors)),
        }
    }
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}
