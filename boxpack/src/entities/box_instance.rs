use std::sync::Arc;

use crate::entities::{BoxType, Product};

/// Note attached to every overflow box
pub const OVERFLOW_NOTE: &str = "does not fit in any available box";

/// A box opened by the [`Packer`](crate::packing::Packer), holding a set of products.
#[derive(Clone, Debug)]
pub struct BoxInstance {
    /// Type of the box, `None` for an overflow box (a product which fits none of the box types)
    pub box_type: Option<BoxType>,
    /// Products in the order they were placed
    pub products: Vec<Arc<Product>>,
    /// Volume of the box not taken by its products.
    /// Bookkeeping only, the fit test never consults it. Always 0 for overflow boxes.
    pub remaining_volume: u64,
}

impl BoxInstance {
    /// Opens an empty box of type `box_type`
    pub fn open(box_type: &BoxType) -> Self {
        BoxInstance {
            box_type: Some(box_type.clone()),
            products: vec![],
            remaining_volume: box_type.volume(),
        }
    }

    /// Opens an empty overflow box
    pub fn overflow() -> Self {
        BoxInstance {
            box_type: None,
            products: vec![],
            remaining_volume: 0,
        }
    }

    pub fn add_product(&mut self, product: Arc<Product>) {
        self.remaining_volume = self.remaining_volume.saturating_sub(product.volume());
        self.products.push(product);
    }

    /// Id of the box type, `None` for an overflow box
    pub fn id(&self) -> Option<&str> {
        self.box_type.as_ref().map(|bt| bt.id.as_str())
    }

    pub fn is_overflow(&self) -> bool {
        self.box_type.is_none()
    }

    pub fn note(&self) -> Option<&'static str> {
        match self.is_overflow() {
            true => Some(OVERFLOW_NOTE),
            false => None,
        }
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.id.as_str())
    }

    pub fn product_volume(&self) -> u64 {
        self.products.iter().map(|p| p.volume()).sum()
    }
}
