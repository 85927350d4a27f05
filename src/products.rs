//! Products

use serde::{Deserialize, Serialize};

use crate::tables::ProductTable;

/// The status value the men's table uses for sellable products.
pub const ACTIVE_STATUS: &str = "active";

/// Raw activity and stock columns as read from one of the product tables.
///
/// The three tables drifted apart: the men's table carries a `status` string instead
/// of an `is_active` flag, and older rows keep their stock in `stock` rather than
/// `stock_quantity`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductColumns {
    /// `is_active` column, when the table has one.
    pub is_active: Option<bool>,

    /// `status` column, when the table has one.
    pub status: Option<String>,

    /// `stock_quantity` column.
    pub stock_quantity: Option<i64>,

    /// Legacy `stock` column.
    pub stock: Option<i64>,
}

impl ProductColumns {
    /// Whether the product is sellable according to the rules of `table`.
    #[must_use]
    pub fn is_active(&self, table: ProductTable) -> bool {
        match table {
            ProductTable::Men => self.status.as_deref() == Some(ACTIVE_STATUS),
            ProductTable::Women | ProductTable::Kids => self.is_active.unwrap_or(true),
        }
    }

    /// Live stock, trying `stock_quantity`, then `stock`, then zero.
    #[must_use]
    pub fn stock(&self) -> u32 {
        self.stock_quantity
            .or(self.stock)
            .map_or(0, |stock| u32::try_from(stock.max(0)).unwrap_or(u32::MAX))
    }

    /// Reduce the raw columns to the facts the guard needs.
    #[must_use]
    pub fn availability(&self, table: ProductTable) -> Availability {
        Availability {
            active: self.is_active(table),
            stock: self.stock(),
        }
    }
}

/// Whether a product can be sold, and how many units are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Product is active.
    pub active: bool,

    /// Units in stock.
    pub stock: u32,
}
