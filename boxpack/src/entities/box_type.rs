use anyhow::{Result, ensure};

use crate::entities::Product;
use crate::geometry::Dimension;

/// A type of box available in the [`Catalog`](crate::entities::Catalog)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxType {
    pub id: String,
    /// Inner dimensions of the box
    pub dimension: Dimension,
}

impl BoxType {
    pub fn new(id: impl Into<String>, dimension: Dimension) -> Result<Self> {
        let id = id.into();
        ensure!(!id.is_empty(), "box type id cannot be empty ({dimension})");
        ensure!(
            dimension.is_positive(),
            "box type {id:?} has a non-positive extent ({dimension})"
        );
        Ok(BoxType { id, dimension })
    }

    pub fn volume(&self) -> u64 {
        self.dimension.volume()
    }

    /// Whether `product` fits inside this box on its own, in any of its orientations.
    pub fn admits(&self, product: &Product) -> bool {
        product.dimension.fits_rotated_within(&self.dimension)
    }
}
