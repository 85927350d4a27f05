//! Product Records

use serde::{Deserialize, Serialize};
use storefront::{products::Availability, tables::ProductTable};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub table: ProductTable,
    pub name: String,

    /// Price in minor units.
    pub price: u64,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub availability: Availability,
}
