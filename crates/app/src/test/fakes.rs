//! In-memory repositories mirroring the `PostgreSQL` ones.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use storefront::{quantity::Quantity, tables::ProductTable};
use tokio::sync::Mutex;

use crate::domain::{
    carts::{
        data::CartItemInsert,
        records::{CartItemId, CartItemRecord},
        repository::CartItemsRepository,
    },
    products::{
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
    },
    users::UserId,
    wishlists::{
        data::WishlistItemInsert,
        records::{WishlistItemId, WishlistItemRecord},
        repository::WishlistItemsRepository,
    },
};

#[derive(Debug, Default)]
pub(crate) struct InMemoryProducts {
    rows: Mutex<HashMap<(ProductTable, ProductId), ProductRecord>>,
}

impl InMemoryProducts {
    pub(crate) async fn insert(&self, product: ProductRecord) {
        self.rows
            .lock()
            .await
            .insert((product.table, product.id), product);
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProducts {
    async fn find_product(
        &self,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        Ok(self.rows.lock().await.get(&(table, product)).cloned())
    }
}

#[derive(Debug)]
struct Rows<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Rows<T> {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub(crate) struct InMemoryCartItems {
    state: Mutex<Rows<CartItemRecord>>,
}

#[async_trait]
impl CartItemsRepository for InMemoryCartItems {
    async fn list_items(&self, user: UserId) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        let state = self.state.lock().await;

        Ok(state
            .rows
            .iter()
            .filter(|row| row.user == user)
            .cloned()
            .collect())
    }

    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        let state = self.state.lock().await;

        Ok(state
            .rows
            .iter()
            .filter(|row| {
                row.user == user && row.product_table == table && row.product_id == product
            })
            .cloned()
            .collect())
    }

    async fn get_item(
        &self,
        user: UserId,
        item: CartItemId,
    ) -> Result<CartItemRecord, sqlx::Error> {
        let state = self.state.lock().await;

        state
            .rows
            .iter()
            .find(|row| row.user == user && row.id == item)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn create_item(&self, item: CartItemInsert) -> Result<CartItemRecord, sqlx::Error> {
        let mut state = self.state.lock().await;
        let now = Timestamp::now();

        let record = CartItemRecord {
            id: CartItemId::from_i64(state.next_id()),
            user: item.user,
            product_id: item.product_id,
            product_table: item.table,
            quantity: item.quantity,
            variant: item.variant,
            snapshot: item.snapshot,
            stock_checked: item.stock_checked,
            created_at: now,
            updated_at: now,
        };

        state.rows.push(record.clone());

        Ok(record)
    }

    async fn update_quantity(
        &self,
        user: UserId,
        item: CartItemId,
        quantity: Quantity,
        stock_checked: u32,
    ) -> Result<CartItemRecord, sqlx::Error> {
        let mut state = self.state.lock().await;

        let row = state
            .rows
            .iter_mut()
            .find(|row| row.user == user && row.id == item)
            .ok_or(sqlx::Error::RowNotFound)?;

        row.quantity = quantity;
        row.stock_checked = stock_checked;
        row.updated_at = Timestamp::now();

        Ok(row.clone())
    }

    async fn delete_item(&self, user: UserId, item: CartItemId) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();

        state.rows.retain(|row| !(row.user == user && row.id == item));

        Ok((before - state.rows.len()) as u64)
    }

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();

        state.rows.retain(|row| row.user != user);

        Ok((before - state.rows.len()) as u64)
    }
}

#[derive(Debug, Default)]
pub(crate) struct InMemoryWishlistItems {
    state: Mutex<Rows<WishlistItemRecord>>,
}

#[async_trait]
impl WishlistItemsRepository for InMemoryWishlistItems {
    async fn list_items(&self, user: UserId) -> Result<Vec<WishlistItemRecord>, sqlx::Error> {
        let state = self.state.lock().await;

        Ok(state
            .rows
            .iter()
            .filter(|row| row.user == user)
            .cloned()
            .collect())
    }

    async fn list_product_items(
        &self,
        user: UserId,
        table: ProductTable,
        product: ProductId,
    ) -> Result<Vec<WishlistItemRecord>, sqlx::Error> {
        let state = self.state.lock().await;

        Ok(state
            .rows
            .iter()
            .filter(|row| {
                row.user == user && row.product_table == table && row.product_id == product
            })
            .cloned()
            .collect())
    }

    async fn get_item(
        &self,
        user: UserId,
        item: WishlistItemId,
    ) -> Result<WishlistItemRecord, sqlx::Error> {
        let state = self.state.lock().await;

        state
            .rows
            .iter()
            .find(|row| row.user == user && row.id == item)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn create_item(
        &self,
        item: WishlistItemInsert,
    ) -> Result<WishlistItemRecord, sqlx::Error> {
        let mut state = self.state.lock().await;
        let now = Timestamp::now();

        let record = WishlistItemRecord {
            id: WishlistItemId::from_i64(state.next_id()),
            user: item.user,
            product_id: item.product_id,
            product_table: item.table,
            variant: item.variant,
            snapshot: item.snapshot,
            created_at: now,
            updated_at: now,
        };

        state.rows.push(record.clone());

        Ok(record)
    }

    async fn delete_item(&self, user: UserId, item: WishlistItemId) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();

        state.rows.retain(|row| !(row.user == user && row.id == item));

        Ok((before - state.rows.len()) as u64)
    }

    async fn delete_items(&self, user: UserId) -> Result<u64, sqlx::Error> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();

        state.rows.retain(|row| row.user != user);

        Ok((before - state.rows.len()) as u64)
    }
}
