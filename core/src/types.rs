//! Domain DTOs for the coffee API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Prices travel as JSON numbers with their exact digits and are held as
//! `Decimal` on both ends.
//! Decoding is strict: a record missing any field is a decode error rather
//! than a record with zero values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A coffee record as returned by the service, with every server-assigned
/// field populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Request payload for creating a coffee. Carries no id and no timestamps.
///
/// Only obtainable through [`NewCoffee::builder`], so every value satisfies
/// the record invariants.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCoffee {
    name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
}

impl NewCoffee {
    pub fn builder() -> NewCoffeeBuilder {
        NewCoffeeBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCoffeeBuilder {
    name: Option<String>,
    price: Option<Decimal>,
}

impl NewCoffeeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<NewCoffee, ApiError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidRecord("name must not be empty".to_string()))?;
        let price = self
            .price
            .ok_or_else(|| ApiError::InvalidRecord("price is required".to_string()))?;
        if price < Decimal::ZERO {
            return Err(ApiError::InvalidRecord(format!("price must not be negative, got {price}")));
        }
        Ok(NewCoffee { name, price })
    }
}
