//! Wishlists service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::{guard, quantity::Quantity, resolver};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            CartsService,
            data::NewCartItem,
            records::{CartItemRecord, ProductSnapshot},
        },
        products::repository::{PgProductsRepository, ProductsRepository},
        users::UserId,
        wishlists::{
            data::{NewWishlistItem, WishlistItemInsert},
            errors::WishlistsServiceError,
            records::{WishlistItemId, WishlistItemRecord},
            repository::{PgWishlistItemsRepository, WishlistItemsRepository},
        },
    },
};

pub struct PgWishlistsService {
    products: Arc<dyn ProductsRepository>,
    items: Arc<dyn WishlistItemsRepository>,
    carts: Arc<dyn CartsService>,
}

impl PgWishlistsService {
    #[must_use]
    pub fn new(db: &Db, carts: Arc<dyn CartsService>) -> Self {
        Self::with_repositories(
            Arc::new(PgProductsRepository::new(db.pool().clone())),
            Arc::new(PgWishlistItemsRepository::new(db.pool().clone())),
            carts,
        )
    }

    pub(crate) fn with_repositories(
        products: Arc<dyn ProductsRepository>,
        items: Arc<dyn WishlistItemsRepository>,
        carts: Arc<dyn CartsService>,
    ) -> Self {
        Self {
            products,
            items,
            carts,
        }
    }
}

impl fmt::Debug for PgWishlistsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgWishlistsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl WishlistsService for PgWishlistsService {
    async fn get_wishlist(
        &self,
        user: UserId,
    ) -> Result<Vec<WishlistItemRecord>, WishlistsServiceError> {
        Ok(self.items.list_items(user).await?)
    }

    async fn add_item(
        &self,
        user: UserId,
        item: NewWishlistItem,
    ) -> Result<WishlistItemRecord, WishlistsServiceError> {
        let product = self
            .products
            .find_product(item.table, item.product_id)
            .await?
            .ok_or(WishlistsServiceError::ProductNotFound)?;

        guard::ensure_available(Some(&product.availability))?;

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

        resolver::resolve_wishlist(existing)?;

        let created = self
            .items
            .create_item(WishlistItemInsert {
                user,
                product_id: item.product_id,
                table: item.table,
                variant: item.variant,
                snapshot: ProductSnapshot::from(&product),
            })
            .await?;

        info!(
            user_id = %user,
            product_id = %created.product_id,
            product_table = %created.product_table,
            item_id = %created.id,
            "wishlist line added"
        );

        Ok(created)
    }

    async fn remove_item(
        &self,
        user: UserId,
        item: WishlistItemId,
    ) -> Result<(), WishlistsServiceError> {
        let rows_affected = self.items.delete_item(user, item).await?;

        if rows_affected == 0 {
            return Err(WishlistsServiceError::NotFound);
        }

        info!(user_id = %user, item_id = %item, "wishlist line removed");

        Ok(())
    }

    async fn clear(&self, user: UserId) -> Result<u64, WishlistsServiceError> {
        let removed = self.items.delete_items(user).await?;

        info!(user_id = %user, removed, "wishlist cleared");

        Ok(removed)
    }

    async fn move_to_cart(
        &self,
        user: UserId,
        item: WishlistItemId,
        quantity: Quantity,
    ) -> Result<CartItemRecord, WishlistsServiceError> {
        let line = self.items.get_item(user, item).await?;

        let cart_line = self
            .carts
            .add_item(
                user,
                NewCartItem {
                    product_id: line.product_id,
                    table: line.product_table,
                    quantity,
                    variant: line.variant,
                },
            )
            .await?;

        // Removed concurrently; the cart line stands.
        if self.items.delete_item(user, item).await? == 0 {
            warn!(user_id = %user, item_id = %item, "wishlist line was gone before the move finished");
        }

        info!(
            user_id = %user,
            item_id = %item,
            cart_item_id = %cart_line.id,
            quantity = %cart_line.quantity,
            "wishlist line moved to cart"
        );

        Ok(cart_line)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Retrieve the user's wishlist lines.
    async fn get_wishlist(
        &self,
        user: UserId,
    ) -> Result<Vec<WishlistItemRecord>, WishlistsServiceError>;

    /// Add a product variant. Duplicates are rejected.
    async fn add_item(
        &self,
        user: UserId,
        item: NewWishlistItem,
    ) -> Result<WishlistItemRecord, WishlistsServiceError>;

    /// Remove one of the user's lines.
    async fn remove_item(
        &self,
        user: UserId,
        item: WishlistItemId,
    ) -> Result<(), WishlistsServiceError>;

    /// Remove every line, returning how many there were.
    async fn clear(&self, user: UserId) -> Result<u64, WishlistsServiceError>;

    /// Add the line's product variant to the cart, then drop it from the wishlist.
    async fn move_to_cart(
        &self,
        user: UserId,
        item: WishlistItemId,
        quantity: Quantity,
    ) -> Result<CartItemRecord, WishlistsServiceError>;
}
