use anyhow::{Result, ensure};

use crate::geometry::Dimension;

/// A physical product to be packed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Identifier, unique within an [`Order`](crate::entities::Order)
    pub id: String,
    pub dimension: Dimension,
}

impl Product {
    pub fn new(id: impl Into<String>, dimension: Dimension) -> Result<Self> {
        let id = id.into();
        ensure!(!id.is_empty(), "product id cannot be empty ({dimension})");
        ensure!(
            dimension.is_positive(),
            "product {id:?} has a non-positive extent ({dimension})"
        );
        Ok(Product { id, dimension })
    }

    pub fn volume(&self) -> u64 {
        self.dimension.volume()
    }
}
