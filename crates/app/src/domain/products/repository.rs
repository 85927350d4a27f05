//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use storefront::{attributes::decode_attribute_list, products::ProductColumns, tables::ProductTable};

use crate::domain::products::records::{ProductId, ProductRecord};

const FIND_WOMEN_PRODUCT_SQL: &str = include_str!("sql/find_women_product.sql");
const FIND_MEN_PRODUCT_SQL: &str = include_str!("sql/find_men_product.sql");
const FIND_KIDS_PRODUCT_SQL: &str = include_str!("sql/find_kids_product.sql");

/// Table-parameterised product lookups.
#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    /// Read a product row live from `table`.
    async fn find_product(
        &self,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_product(
        &self,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let sql = match table {
            ProductTable::Women => FIND_WOMEN_PRODUCT_SQL,
            ProductTable::Men => FIND_MEN_PRODUCT_SQL,
            ProductTable::Kids => FIND_KIDS_PRODUCT_SQL,
        };

        query_as::<Postgres, ProductRecord>(sql)
            .bind(product.into_i64())
            .fetch_optional(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let table = try_get_table(row)?;

        let columns = ProductColumns {
            is_active: row.try_get("is_active")?,
            status: row.try_get("status")?,
            stock_quantity: row.try_get("stock_quantity")?,
            stock: row.try_get("stock")?,
        };

        let sizes: Option<String> = row.try_get("sizes")?;
        let colors: Option<String> = row.try_get("colors")?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            table,
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            image: row.try_get("image")?,
            sku: row.try_get("sku")?,
            sizes: decode_attribute_list(sizes.as_deref()),
            colors: decode_attribute_list(colors.as_deref()),
            availability: columns.availability(table),
        })
    }
}

/// Read a non-negative minor-unit amount.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode a minor-unit amount for a `BIGINT` column.
pub(crate) fn bind_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| {
        sqlx::Error::Encode(format!("{col} {amount} does not fit BIGINT: {e}").into())
    })
}

/// Decode the `product_table` column.
pub(crate) fn try_get_table(row: &PgRow) -> Result<ProductTable, sqlx::Error> {
    let name: String = row.try_get("product_table")?;

    name.parse::<ProductTable>().map_err(|e| sqlx::Error::ColumnDecode {
        index: "product_table".to_string(),
        source: Box::new(e),
    })
}
