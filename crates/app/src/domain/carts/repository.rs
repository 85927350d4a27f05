//! Cart Items Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use storefront::{quantity::Quantity, tables::ProductTable, variant::Variant};

use crate::domain::{
    carts::{
        data::CartItemInsert,
        records::{CartItemId, CartItemRecord, ProductSnapshot},
    },
    products::{
        records::ProductId,
        repository::{bind_amount, try_get_amount, try_get_table},
    },
    users::UserId,
};

const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const LIST_PRODUCT_CART_ITEMS_SQL: &str = include_str!("sql/list_product_cart_items.sql");
const GET_CART_ITEM_SQL: &str = include_str!("sql/get_cart_item.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("sql/create_cart_item.sql");
const UPDATE_CART_ITEM_QUANTITY_SQL: &str = include_str!("sql/update_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("sql/delete_cart_items.sql");

#[automock]
#[async_trait]
pub(crate) trait CartItemsRepository: Send + Sync {
    /// Every line the user holds, oldest first.
    async fn list_items(&self, user: UserId) -> Result<Vec<CartItemRecord>, sqlx::Error>;

    /// The user's lines for one product in one table, across all variants.
    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error>;

    /// A single line owned by `user`. Fails with `RowNotFound` otherwise.
    async fn get_item(&self, user: UserId, item: CartItemId)
    -> Result<CartItemRecord, sqlx::Error>;

    async fn create_item(&self, item: CartItemInsert) -> Result<CartItemRecord, sqlx::Error>;

    /// Set a line's quantity and the stock level it was checked against.
    async fn update_quantity(
        &self,
        user: UserId,
        item: CartItemId,
        quantity: Quantity,
        stock_checked: u32,
    ) -> Result<CartItemRecord, sqlx::Error>;

    async fn delete_item(&self, user: UserId, item: CartItemId) -> Result<u64, sqlx::Error>;

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgCartItemsRepository {
    pool: PgPool,
}

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartItemsRepository for PgCartItemsRepository {
    async fn list_items(&self, user: UserId) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LIST_CART_ITEMS_SQL)
            .bind(user.into_i64())
            .fetch_all(&self.pool)
            .await
    }

    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LIST_PRODUCT_CART_ITEMS_SQL)
            .bind(user.into_i64())
            .bind(product.into_i64())
            .bind(table.as_str())
            .fetch_all(&self.pool)
            .await
    }

    async fn get_item(
        &self,
        user: UserId,
        item: CartItemId,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEM_SQL)
            .bind(item.into_i64())
            .bind(user.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    async fn create_item(&self, item: CartItemInsert) -> Result<CartItemRecord, sqlx::Error> {
        let price = bind_amount(item.snapshot.price, "price")?;
        let (color, size) = item.variant.into_parts();

        query_as::<Postgres, CartItemRecord>(CREATE_CART_ITEM_SQL)
            .bind(item.user.into_i64())
            .bind(item.product_id.into_i64())
            .bind(item.table.as_str())
            .bind(i64::from(item.quantity.get()))
            .bind(color)
            .bind(size)
            .bind(item.snapshot.name)
            .bind(price)
            .bind(item.snapshot.image)
            .bind(item.snapshot.sku)
            .bind(i64::from(item.stock_checked))
            .fetch_one(&self.pool)
            .await
    }

    async fn update_quantity(
        &self,
        user: UserId,
        item: CartItemId,
        quantity: Quantity,
        stock_checked: u32,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(UPDATE_CART_ITEM_QUANTITY_SQL)
            .bind(item.into_i64())
            .bind(user.into_i64())
            .bind(i64::from(quantity.get()))
            .bind(i64::from(stock_checked))
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_item(&self, user: UserId, item: CartItemId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(item.into_i64())
            .bind(user.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEMS_SQL)
            .bind(user.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let product_table = try_get_table(row)?;

        let quantity = Quantity::new(i64::from(row.try_get::<i32, _>("quantity")?)).map_err(
            |e| sqlx::Error::ColumnDecode {
                index: "quantity".to_string(),
                source: Box::new(e),
            },
        )?;

        let stock_checked: i64 = row.try_get("stock_checked")?;

        Ok(Self {
            id: CartItemId::from_i64(row.try_get("id")?),
            user: UserId::from_i64(row.try_get("user_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            product_table,
            quantity,
            variant: Variant::new(row.try_get("color")?, row.try_get("size")?),
            snapshot: ProductSnapshot {
                name: row.try_get("product_name")?,
                price: try_get_amount(row, "price")?,
                image: row.try_get("image")?,
                sku: row.try_get("sku")?,
            },
            stock_checked: u32::try_from(stock_checked.max(0)).unwrap_or(u32::MAX),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
