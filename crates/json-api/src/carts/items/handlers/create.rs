//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::data::NewCartItem;

use crate::{
    carts::{errors::into_api_error, models::CartItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
    validation::Validator,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_id: Option<i64>,

    /// One of `products_women`, `products_men`, `products_kids`
    pub product_table: Option<String>,

    /// Between 1 and 10
    pub quantity: Option<i64>,

    pub color: Option<String>,
    pub size: Option<String>,
}

impl AddCartItemRequest {
    fn validate(self) -> Result<NewCartItem, ApiError> {
        let mut validator = Validator::default();

        let product_id = validator.product_id(self.product_id);
        let table = validator.product_table(self.product_table.as_deref());
        let quantity = validator.quantity(self.quantity);
        let variant = validator.variant(self.color, self.size);

        let item = product_id
            .zip(table)
            .zip(quantity)
            .map(|((product_id, table), quantity)| NewCartItem {
                product_id,
                table,
                quantity,
                variant,
            });

        validator.finish(item)
    }
}

/// Add Cart Item Handler
///
/// Adds a product variant to the cart. An existing line for the same variant is
/// topped up, capped at 10 units, provided live stock covers the result.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart line created or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Concurrent add for the same variant"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed, product inactive or insufficient stock"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(json, depot),
    fields(
        user_id = tracing::field::Empty,
        product_id = tracing::field::Empty,
        product_table = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = json.into_inner().validate()?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("product_id", tracing::field::display(item.product_id));
    span.record("product_table", tracing::field::display(item.table));
    span.record("quantity", tracing::field::display(item.quantity));

    let line = state
        .app
        .carts
        .add_item(user, item)
        .await
        .map_err(into_api_error)?;

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront::tables::ProductTable;
    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{TEST_USER_ID, carts_service, make_cart_item, red_medium};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/items").post(handler))
    }

    fn body() -> Value {
        json!({
            "product_id": 101,
            "product_table": "products_women",
            "quantity": 3,
            "color": "Red",
            "size": "M"
        })
    }

    fn failing_with(error: CartsServiceError) -> MockCartsService {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(move |_, _| Err(error));

        carts
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|user, item| {
                *user == TEST_USER_ID
                    && item.product_id.into_i64() == 101
                    && item.table == ProductTable::Women
                    && item.quantity.get() == 3
                    && item.variant == red_medium()
            })
            .return_once(|_, _| Ok(make_cart_item(9, 3)));

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&body())
            .send(&make_service(carts))
            .await;

        let line: CartItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(line.id, 9);
        assert_eq!(line.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_payload_returns_422_without_calling_service() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_id": 101, "product_table": "products_shoes", "quantity": 11 }))
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["success"], json!(false));
        assert!(body["errors"].get("product_table").is_some());
        assert_eq!(
            body["errors"]["quantity"],
            json!(["The quantity field must not be greater than 10."])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_mistyped_quantity_returns_422_envelope() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&json!({
                "product_id": 101,
                "product_table": "products_women",
                "quantity": "three"
            }))
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Validation failed"));
        assert!(
            body["errors"]["body"][0]
                .as_str()
                .is_some_and(|message| message.contains("three")),
            "the message should quote the rejected value"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_non_json_body_returns_422_envelope() -> TestResult {
        let mut res = TestClient::post("http://example.com/cart/items")
            .raw_json("product_id=101")
            .send(&make_service(MockCartsService::new()))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            body["errors"]["body"],
            json!(["The request body must be valid JSON."])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_insufficient_stock_returns_422_with_available_stock() -> TestResult {
        let carts = failing_with(CartsServiceError::InsufficientStock {
            requested: 7,
            available: 5,
        });

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&body())
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(body["available_stock"], json!(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_product_returns_422() -> TestResult {
        let res = TestClient::post("http://example.com/cart/items")
            .json(&body())
            .send(&make_service(failing_with(CartsServiceError::ProductInactive)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_product_returns_404() -> TestResult {
        let res = TestClient::post("http://example.com/cart/items")
            .json(&body())
            .send(&make_service(failing_with(CartsServiceError::ProductNotFound)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_lost_insert_race_returns_409() -> TestResult {
        let res = TestClient::post("http://example.com/cart/items")
            .json(&body())
            .send(&make_service(failing_with(CartsServiceError::AlreadyExists)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
