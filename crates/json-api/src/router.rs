//! App Router

use salvo::Router;

use crate::{carts, healthcheck, identity, products, wishlists};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("products/{table}/{product:num}").get(products::get::handler))
        .push(
            Router::new()
                .hoop(identity::handler)
                .push(
                    Router::with_path("cart")
                        .get(carts::get::handler)
                        .delete(carts::clear::handler)
                        .push(Router::with_path("summary").get(carts::summary::handler))
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{item:num}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("wishlist")
                        .get(wishlists::get::handler)
                        .delete(wishlists::clear::handler)
                        .push(
                            Router::with_path("items")
                                .post(wishlists::items::create::handler)
                                .push(
                                    Router::with_path("{item:num}")
                                        .delete(wishlists::items::delete::handler)
                                        .push(
                                            Router::with_path("move-to-cart")
                                                .post(wishlists::items::move_to_cart::handler),
                                        ),
                                ),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::{
        context::AppContext,
        domain::{
            carts::{MockCartsService, models::Cart},
            products::MockProductsService,
            wishlists::MockWishlistsService,
        },
    };

    use crate::{catcher, identity::USER_ID_HEADER, state::State};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        let state = State::from_app_context(AppContext {
            carts: Arc::new(carts),
            wishlists: Arc::new(MockWishlistsService::new()),
            products: Arc::new(MockProductsService::new()),
        });

        Service::new(Router::new().hoop(inject(state)).push(app_router()))
            .catcher(catcher::catcher())
    }

    #[tokio::test]
    async fn cart_routes_require_identity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body["message"], Value::from("Unauthenticated"));

        Ok(())
    }

    #[tokio::test]
    async fn cart_routes_use_the_forwarded_user() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| user.into_i64() == 42)
            .return_once(|_| Ok(Cart::new(Vec::new())));

        let res = TestClient::get("http://example.com/cart")
            .add_header(USER_ID_HEADER, "42", true)
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_item_ids_render_json_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_item().never();

        let mut res = TestClient::put("http://example.com/cart/items/abc")
            .add_header(USER_ID_HEADER, "42", true)
            .json(&serde_json::json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["success"], Value::from(false));

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_is_public() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
