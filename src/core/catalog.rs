//! # Destination Catalog
//!
//! The fixed list of destinations a screen can show. A `Catalog` can only
//! be built through [`Catalog::new`], which checks that it is non-empty,
//! that ids are unique and that every price is positive. After that it is
//! read-only for the life of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque handle to a destination's artwork (an asset name, not pixels).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    /// Smallest currency unit (Dalasi for the built-in catalog).
    pub price: u64,
    /// Informational only, shown as-is.
    pub rating: String,
    pub image: ImageRef,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId(u32),
    ZeroPrice(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no destinations"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate destination id {id}"),
            CatalogError::ZeroPrice(id) => write!(f, "destination {id} has a zero price"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        if destinations.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for d in &destinations {
            if !seen.insert(d.id) {
                return Err(CatalogError::DuplicateId(d.id));
            }
            if d.price == 0 {
                return Err(CatalogError::ZeroPrice(d.id));
            }
        }
        Ok(Self { destinations })
    }

    /// The three Gambian destinations the app ships with.
    pub fn builtin() -> Self {
        Self {
            destinations: vec![
                Destination {
                    id: 1,
                    name: "Kunta Kinteh Island".to_string(),
                    price: 5000,
                    rating: "4.8".to_string(),
                    image: ImageRef::new("kunta-kinteh"),
                    description: "A historical heritage site harboring tales of slavery in \
                        Africa, symbolizing resistance and the strength of a \"never again\"."
                        .to_string(),
                },
                Destination {
                    id: 2,
                    name: "Bijilo Forest Park".to_string(),
                    price: 4000,
                    rating: "4.5".to_string(),
                    image: ImageRef::new("bijilo-forest"),
                    description: "Discover the beauty of nature purely raw and interact with \
                        some of its innocent and interesting creatures."
                        .to_string(),
                },
                Destination {
                    id: 3,
                    name: "Sanyang Beach".to_string(),
                    price: 3500,
                    rating: "4.9".to_string(),
                    image: ImageRef::new("sanyang-beach"),
                    description: "Can't talk about The Gambia without its cool beaches and \
                        breathtaking sunset views."
                        .to_string(),
                },
            ],
        }
    }

    /// First entry. Always present.
    pub fn first(&self) -> &Destination {
        &self.destinations[0]
    }

    pub fn find(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.destinations.iter().position(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Never true for a constructed catalog; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
