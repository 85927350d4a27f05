//! Wishlist Items Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use storefront::{tables::ProductTable, variant::Variant};

use crate::domain::{
    carts::records::ProductSnapshot,
    products::{
        records::ProductId,
        repository::{bind_amount, try_get_amount, try_get_table},
    },
    users::UserId,
    wishlists::{
        data::WishlistItemInsert,
        records::{WishlistItemId, WishlistItemRecord},
    },
};

const LIST_WISHLIST_ITEMS_SQL: &str = include_str!("sql/list_wishlist_items.sql");
const LIST_PRODUCT_WISHLIST_ITEMS_SQL: &str = include_str!("sql/list_product_wishlist_items.sql");
const GET_WISHLIST_ITEM_SQL: &str = include_str!("sql/get_wishlist_item.sql");
const CREATE_WISHLIST_ITEM_SQL: &str = include_str!("sql/create_wishlist_item.sql");
const DELETE_WISHLIST_ITEM_SQL: &str = include_str!("sql/delete_wishlist_item.sql");
const DELETE_WISHLIST_ITEMS_SQL: &str = include_str!("sql/delete_wishlist_items.sql");

#[automock]
#[async_trait]
pub(crate) trait WishlistItemsRepository: Send + Sync {
    async fn list_items(&self, user: UserId) -> Result<Vec<WishlistItemRecord>, sqlx::Error>;

    /// The user's lines for one product in one table, across all variants.
    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<WishlistItemRecord>, sqlx::Error>;

    async fn get_item(
        &self,
        user: UserId,
        item: WishlistItemId,
    ) -> Result<WishlistItemRecord, sqlx::Error>;

    async fn create_item(
        &self,
        item: WishlistItemInsert,
    ) -> Result<WishlistItemRecord, sqlx::Error>;

    async fn delete_item(&self, user: UserId, item: WishlistItemId) -> Result<u64, sqlx::Error>;

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgWishlistItemsRepository {
    pool: PgPool,
}

impl PgWishlistItemsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistItemsRepository for PgWishlistItemsRepository {
    async fn list_items(&self, user: UserId) -> Result<Vec<WishlistItemRecord>, sqlx::Error> {
        query_as::<Postgres, WishlistItemRecord>(LIST_WISHLIST_ITEMS_SQL)
            .bind(user.into_i64())
            .fetch_all(&self.pool)
            .await
    }

    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<WishlistItemRecord>, sqlx::Error> {
        query_as::<Postgres, WishlistItemRecord>(LIST_PRODUCT_WISHLIST_ITEMS_SQL)
            .bind(user.into_i64())
            .bind(product.into_i64())
            .bind(table.as_str())
            .fetch_all(&self.pool)
            .await
    }

    async fn get_item(
        &self,
        user: UserId,
        item: WishlistItemId,
    ) -> Result<WishlistItemRecord, sqlx::Error> {
        query_as::<Postgres, WishlistItemRecord>(GET_WISHLIST_ITEM_SQL)
            .bind(item.into_i64())
            .bind(user.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    async fn create_item(
        &self,
        item: WishlistItemInsert,
    ) -> Result<WishlistItemRecord, sqlx::Error> {
        let price = bind_amount(item.snapshot.price, "price")?;
        let (color, size) = item.variant.into_parts();

        query_as::<Postgres, WishlistItemRecord>(CREATE_WISHLIST_ITEM_SQL)
            .bind(item.user.into_i64())
            .bind(item.product_id.into_i64())
            .bind(item.table.as_str())
            .bind(color)
            .bind(size)
            .bind(item.snapshot.name)
            .bind(price)
            .bind(item.snapshot.image)
            .bind(item.snapshot.sku)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_item(&self, user: UserId, item: WishlistItemId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_WISHLIST_ITEM_SQL)
            .bind(item.into_i64())
            .bind(user.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_WISHLIST_ITEMS_SQL)
            .bind(user.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for WishlistItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: WishlistItemId::from_i64(row.try_get("id")?),
            user: UserId::from_i64(row.try_get("user_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            product_table: try_get_table(row)?,
            variant: Variant::new(row.try_get("color")?, row.try_get("size")?),
            snapshot: ProductSnapshot {
                name: row.try_get("product_name")?,
                price: try_get_amount(row, "price")?,
                image: row.try_get("image")?,
                sku: row.try_get("sku")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
