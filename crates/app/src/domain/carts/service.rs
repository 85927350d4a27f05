//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::SignedDuration;
use mockall::automock;
use storefront::{
    guard,
    quantity::Quantity,
    resolver::{self, CartResolution},
};
use tracing::{debug, info};

use crate::{
    cache::{self, CacheStore, keys},
    database::Db,
    domain::{
        carts::{
            data::{CartItemInsert, NewCartItem},
            errors::CartsServiceError,
            models::{Cart, CartSummary},
            records::{CartItemId, CartItemRecord, ProductSnapshot},
            repository::{CartItemsRepository, PgCartItemsRepository},
        },
        products::repository::{PgProductsRepository, ProductsRepository},
        users::UserId,
    },
};

pub struct PgCartsService {
    products: Arc<dyn ProductsRepository>,
    items: Arc<dyn CartItemsRepository>,
    cache: Arc<dyn CacheStore>,
    summary_ttl: SignedDuration,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: &Db, cache: Arc<dyn CacheStore>, summary_ttl: SignedDuration) -> Self {
        Self::with_repositories(
            Arc::new(PgProductsRepository::new(db.pool().clone())),
            Arc::new(PgCartItemsRepository::new(db.pool().clone())),
            cache,
            summary_ttl,
        )
    }

    pub(crate) fn with_repositories(
        products: Arc<dyn ProductsRepository>,
        items: Arc<dyn CartItemsRepository>,
        cache: Arc<dyn CacheStore>,
        summary_ttl: SignedDuration,
    ) -> Self {
        Self {
            products,
            items,
            cache,
            summary_ttl,
        }
    }

    fn invalidate_summary(&self, user: UserId) {
        self.cache.invalidate(&[keys::cart_summary(user)]);
    }
}

impl fmt::Debug for PgCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCartsService")
            .field("summary_ttl", &self.summary_ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserId) -> Result<Cart, CartsServiceError> {
        let items = self.items.list_items(user).await?;

        Ok(Cart::new(items))
    }

    async fn add_item(
        &self,
        user: UserId,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let product = self
            .products
            .find_product(item.table, item.product_id)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let availability = guard::ensure_available(Some(&product.availability))?;

        let lines = self
            .items
            .list_product_items(user, item.table, item.product_id)
            .await?;

        let existing = resolver::find_existing(
            &lines,
            item.product_id.into_i64(),
            item.table,
            &item.variant,
        );

        let resolution = resolver::resolve_cart(existing, item.quantity);

        // Merged lines are checked at their new total, not the increment.
        guard::ensure_stock(availability, resolution.quantity().get())?;

        let saved = match resolution {
            CartResolution::Merge { line, quantity } => {
                debug!(item_id = %line.id, from = %line.quantity, to = %quantity, "merging cart line");

                self.items
                    .update_quantity(user, line.id, quantity, availability.stock)
                    .await?
            }
            CartResolution::Insert { quantity } => {
                self.items
                    .create_item(CartItemInsert {
                        user,
                        product_id: item.product_id,
                        table: item.table,
                        quantity,
                        variant: item.variant,
                        snapshot: ProductSnapshot::from(&product),
                        stock_checked: availability.stock,
                    })
                    .await?
            }
        };

        self.invalidate_summary(user);

        info!(
            user_id = %user,
            product_id = %saved.product_id,
            product_table = %saved.product_table,
            item_id = %saved.id,
            quantity = %saved.quantity,
            "cart line saved"
        );

        Ok(saved)
    }

    async fn update_item(
        &self,
        user: UserId,
        item: CartItemId,
        quantity: Quantity,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let line = self.items.get_item(user, item).await?;

        let product = self
            .products
            .find_product(line.product_table, line.product_id)
            .await?;

        let availability = product.as_ref().map(|product| &product.availability);

        guard::validate(availability, quantity.get())?;

        let stock = availability.map_or(0, |availability| availability.stock);

        let updated = self
            .items
            .update_quantity(user, item, quantity, stock)
            .await?;

        self.invalidate_summary(user);

        info!(user_id = %user, item_id = %item, quantity = %quantity, "cart line updated");

        Ok(updated)
    }

    async fn remove_item(&self, user: UserId, item: CartItemId) -> Result<(), CartsServiceError> {
        let rows_affected = self.items.delete_item(user, item).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        self.invalidate_summary(user);

        info!(user_id = %user, item_id = %item, "cart line removed");

        Ok(())
    }

    async fn clear(&self, user: UserId) -> Result<u64, CartsServiceError> {
        let removed = self.items.delete_items(user).await?;

        self.invalidate_summary(user);

        info!(user_id = %user, removed, "cart cleared");

        Ok(removed)
    }

    async fn summary(&self, user: UserId) -> Result<CartSummary, CartsServiceError> {
        let key = keys::cart_summary(user);

        if let Some(summary) = cache::get_json::<CartSummary>(self.cache.as_ref(), &key) {
            return Ok(summary);
        }

        let items = self.items.list_items(user).await?;
        let summary = CartSummary::from_items(&items);

        cache::put_json(self.cache.as_ref(), &key, &summary, self.summary_ttl);

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart lines and totals.
    async fn get_cart(&self, user: UserId) -> Result<Cart, CartsServiceError>;

    /// Add a product variant to the cart, merging into an existing line for the same
    /// variant.
    async fn add_item(
        &self,
        user: UserId,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Set the quantity of one of the user's lines.
    async fn update_item(
        &self,
        user: UserId,
        item: CartItemId,
        quantity: Quantity,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Remove one of the user's lines.
    async fn remove_item(&self, user: UserId, item: CartItemId) -> Result<(), CartsServiceError>;

    /// Remove every line, returning how many there were.
    async fn clear(&self, user: UserId) -> Result<u64, CartsServiceError>;

    /// Line count, unit count and subtotal. Cached per user.
    async fn summary(&self, user: UserId) -> Result<CartSummary, CartsServiceError>;
}
