//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use crate::core::animation::DEFAULT_DURATION;
use crate::core::catalog::{Catalog, Destination, ImageRef};
use crate::core::state::App;

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// A destination with placeholder text fields.
pub fn destination(id: u32, price: u64) -> Destination {
    Destination {
        id,
        name: format!("Destination {id}"),
        price,
        rating: "4.0".to_string(),
        image: ImageRef::new(format!("image-{id}")),
        description: format!("Description for destination {id}."),
    }
}

/// The built-in three-entry catalog (ids 1..=3 at 5000, 4000, 3500).
pub fn test_catalog() -> Catalog {
    Catalog::builtin()
}

/// Creates a test App over the built-in catalog.
pub fn test_app() -> App {
    App::new(Arc::new(test_catalog()), DEFAULT_DURATION)
}
