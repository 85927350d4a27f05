//! Product Tables

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown product table name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product table \"{0}\"")]
pub struct ProductTableParseError(pub String);

/// One of the three parallel product tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductTable {
    /// `products_women`
    #[serde(rename = "products_women")]
    Women,

    /// `products_men`
    #[serde(rename = "products_men")]
    Men,

    /// `products_kids`
    #[serde(rename = "products_kids")]
    Kids,
}

impl ProductTable {
    /// Every product table.
    pub const ALL: [ProductTable; 3] = [Self::Women, Self::Men, Self::Kids];

    /// Storage name of the table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Women => "products_women",
            Self::Men => "products_men",
            Self::Kids => "products_kids",
        }
    }
}

impl Display for ProductTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductTable {
    type Err = ProductTableParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| ProductTableParseError(s.to_string()))
    }
}
