//! Test Helpers

use storefront::{
    products::ProductColumns, quantity::Quantity, tables::ProductTable,
};

use crate::domain::products::records::{ProductId, ProductRecord};

pub(crate) fn quantity(value: u32) -> Quantity {
    Quantity::new(i64::from(value)).expect("test quantity should be within range")
}

fn product(id: i64, table: ProductTable, columns: &ProductColumns) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        table,
        name: format!("Product {id}"),
        price: 1_000,
        image: Some(format!("/images/{id}.jpg")),
        sku: Some(format!("SKU-{id}")),
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        colors: vec!["Red".to_string(), "Blue".to_string()],
        availability: columns.availability(table),
    }
}

/// Active women's product with `stock` units in `stock_quantity`.
pub(crate) fn women_product(id: i64, stock: i64) -> ProductRecord {
    product(
        id,
        ProductTable::Women,
        &ProductColumns {
            is_active: Some(true),
            stock_quantity: Some(stock),
            ..ProductColumns::default()
        },
    )
}

/// Men's product with the given `status`.
pub(crate) fn men_product(id: i64, status: &str, stock: i64) -> ProductRecord {
    product(
        id,
        ProductTable::Men,
        &ProductColumns {
            status: Some(status.to_string()),
            stock_quantity: Some(stock),
            ..ProductColumns::default()
        },
    )
}

/// Kids' product with its stock in the legacy `stock` column.
pub(crate) fn kids_product(id: i64, is_active: Option<bool>, stock: i64) -> ProductRecord {
    product(
        id,
        ProductTable::Kids,
        &ProductColumns {
            is_active,
            stock: Some(stock),
            ..ProductColumns::default()
        },
    )
}
