//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront::{
    products::Availability, quantity::Quantity, tables::ProductTable, variant::Variant,
};
use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemId, CartItemRecord, ProductSnapshot},
        },
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        users::UserId,
        wishlists::{
            MockWishlistsService,
            records::{WishlistItemId, WishlistItemRecord},
        },
    },
};

use crate::{catcher, extensions::*, state::State};

pub(crate) const TEST_USER_ID: UserId = UserId::from_i64(7);

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();
    carts.expect_summary().never();

    carts
}

fn strict_wishlists_mock() -> MockWishlistsService {
    let mut wishlists = MockWishlistsService::new();

    wishlists.expect_get_wishlist().never();
    wishlists.expect_add_item().never();
    wishlists.expect_remove_item().never();
    wishlists.expect_clear().never();
    wishlists.expect_move_to_cart().never();

    wishlists
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_get_product().never();

    products
}

fn state(
    carts: MockCartsService,
    wishlists: MockWishlistsService,
    products: MockProductsService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        carts: Arc::new(carts),
        wishlists: Arc::new(wishlists),
        products: Arc::new(products),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
    .catcher(catcher::catcher())
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        state(carts, strict_wishlists_mock(), strict_products_mock()),
        route,
    )
}

pub(crate) fn wishlists_service(wishlists: MockWishlistsService, route: Router) -> Service {
    service(
        state(strict_carts_mock(), wishlists, strict_products_mock()),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        state(strict_carts_mock(), strict_wishlists_mock(), products),
        route,
    )
}

fn snapshot() -> ProductSnapshot {
    ProductSnapshot {
        name: "Linen Dress".to_string(),
        price: 4_500,
        image: Some("/dress.jpg".to_string()),
        sku: Some("LD-1".to_string()),
    }
}

pub(crate) fn red_medium() -> Variant {
    Variant::new(Some("Red".to_string()), Some("M".to_string()))
}

pub(crate) fn make_cart_item(id: i64, quantity: u32) -> CartItemRecord {
    CartItemRecord {
        id: CartItemId::from_i64(id),
        user: TEST_USER_ID,
        product_id: ProductId::from_i64(101),
        product_table: ProductTable::Women,
        quantity: Quantity::new(i64::from(quantity)).unwrap_or(Quantity::ONE),
        variant: red_medium(),
        snapshot: snapshot(),
        stock_checked: 5,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_wishlist_item(id: i64) -> WishlistItemRecord {
    WishlistItemRecord {
        id: WishlistItemId::from_i64(id),
        user: TEST_USER_ID,
        product_id: ProductId::from_i64(101),
        product_table: ProductTable::Women,
        variant: red_medium(),
        snapshot: snapshot(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(table: ProductTable, id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        table,
        name: "Linen Dress".to_string(),
        price: 4_500,
        image: None,
        sku: None,
        sizes: vec!["S".to_string(), "M".to_string()],
        colors: vec!["Red".to_string()],
        availability: Availability {
            active: true,
            stock: 5,
        },
    }
}
