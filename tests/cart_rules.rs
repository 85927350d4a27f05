//! Cart and wishlist scenarios run against the pure rules.
//!
//! A tiny in-memory cart drives the resolver and guard the same way the application
//! services do: check the product, resolve against existing lines, check stock with
//! the target quantity, then write.

use testresult::TestResult;

use storefront::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    product_id: i64,
    table: ProductTable,
    variant: Variant,
    quantity: Quantity,
}

impl VariantLine for Line {
    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn product_table(&self) -> ProductTable {
        self.table
    }

    fn variant(&self) -> &Variant {
        &self.variant
    }
}

impl HasQuantity for Line {
    fn quantity(&self) -> Quantity {
        self.quantity
    }
}

#[derive(Debug, Default)]
struct Cart {
    lines: Vec<Line>,
}

impl Cart {
    fn add(
        &mut self,
        product: Option<&Availability>,
        product_id: i64,
        table: ProductTable,
        variant: Variant,
        requested: Quantity,
    ) -> Result<Quantity, GuardError> {
        let product = ensure_available(product)?;

        let existing = find_existing(&self.lines, product_id, table, &variant);
        let resolution = resolve_cart(existing, requested);

        ensure_stock(product, resolution.quantity().get())?;

        let quantity = resolution.quantity();

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id && line.table == table && line.variant == variant)
        {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(Line {
                product_id,
                table,
                variant,
                quantity,
            }),
        }

        Ok(quantity)
    }
}

fn red_m() -> Variant {
    Variant::new(Some("Red".to_string()), Some("M".to_string()))
}

fn stock(stock: u32) -> Availability {
    Availability {
        active: true,
        stock,
    }
}

#[test]
fn merge_rejected_when_merged_quantity_exceeds_stock() -> TestResult {
    let product = stock(5);
    let mut cart = Cart::default();

    let first = cart.add(Some(&product), 101, ProductTable::Women, red_m(), Quantity::new(3)?)?;

    assert_eq!(first, Quantity::new(3)?);

    let second = cart.add(Some(&product), 101, ProductTable::Women, red_m(), Quantity::new(4)?);

    assert_eq!(
        second,
        Err(GuardError::InsufficientStock {
            requested: 7,
            available: 5
        })
    );
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines.first().map(|l| l.quantity), Some(Quantity::new(3)?));

    Ok(())
}

#[test]
fn repeated_adds_clamp_at_ten() -> TestResult {
    let product = stock(50);
    let mut cart = Cart::default();

    for requested in [6, 6, 6] {
        cart.add(Some(&product), 7, ProductTable::Kids, red_m(), Quantity::new(requested)?)?;
    }

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines.first().map(|l| l.quantity.get()), Some(10));

    Ok(())
}

#[test]
fn distinct_variants_become_distinct_lines() -> TestResult {
    let product = stock(20);
    let mut cart = Cart::default();

    let blue_m = Variant::new(Some("Blue".to_string()), Some("M".to_string()));

    cart.add(Some(&product), 9, ProductTable::Women, red_m(), Quantity::ONE)?;
    cart.add(Some(&product), 9, ProductTable::Women, blue_m, Quantity::ONE)?;
    cart.add(Some(&product), 9, ProductTable::Women, Variant::none(), Quantity::ONE)?;

    assert_eq!(cart.lines.len(), 3);

    Ok(())
}

#[test]
fn men_table_inactive_status_blocks_wishlist_add() {
    let columns = ProductColumns {
        status: Some("inactive".to_string()),
        stock_quantity: Some(12),
        ..ProductColumns::default()
    };

    let availability = columns.availability(ProductTable::Men);

    assert_eq!(ensure_available(Some(&availability)), Err(GuardError::Inactive));
}

#[test]
fn women_table_missing_flag_counts_as_active() {
    let columns = ProductColumns {
        stock: Some(3),
        ..ProductColumns::default()
    };

    let availability = columns.availability(ProductTable::Women);

    assert_eq!(availability, stock(3));
    assert_eq!(validate(Some(&availability), 3), Ok(()));
    assert!(validate(Some(&availability), 4).is_err());
}
