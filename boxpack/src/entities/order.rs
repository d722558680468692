use std::sync::Arc;

use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::Product;

/// A set of products to be packed together
#[derive(Clone, Debug)]
pub struct Order {
    pub id: u64,
    pub products: Vec<Arc<Product>>,
}

impl Order {
    pub fn new(id: u64, products: Vec<Product>) -> Result<Self> {
        ensure!(
            products.iter().map(|p| &p.id).all_unique(),
            "product ids must be unique within order {id}, duplicates: {:?}",
            products.iter().map(|p| &p.id).duplicates().collect_vec()
        );
        let products = products.into_iter().map(Arc::new).collect_vec();
        Ok(Order { id, products })
    }

    pub fn product_volume(&self) -> u64 {
        self.products.iter().map(|p| p.volume()).sum()
    }
}
