use anyhow::{Context, Result, bail, ensure};
use rayon::prelude::*;

use crate::entities::{BoxType, Catalog, Order, Product};
use crate::geometry::Dimension;
use crate::io::ext_repr::{ExtBoxType, ExtDimensions, ExtOrder, ExtPackRequest, ExtProduct};

/// Converts external representations of orders and box types into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Orders with more products than this are rejected.
    /// The search is exponential in the number of products, this bounds its cost.
    pub max_order_size: Option<usize>,
}

impl Importer {
    pub fn new(max_order_size: Option<usize>) -> Importer {
        Importer { max_order_size }
    }

    pub fn import_dimension(&self, ext_dim: &ExtDimensions) -> Result<Dimension> {
        Dimension::try_new(ext_dim.height, ext_dim.width, ext_dim.length)
    }

    pub fn import_product(&self, ext_product: &ExtProduct) -> Result<Product> {
        let dimension = self
            .import_dimension(&ext_product.dimensions)
            .with_context(|| format!("product {:?}", ext_product.product_id))?;
        Product::new(ext_product.product_id.clone(), dimension)
    }

    pub fn import_order(&self, ext_order: &ExtOrder) -> Result<Order> {
        let Some(ext_products) = ext_order.products.as_ref() else {
            bail!("order {} has no product list", ext_order.order_id)
        };
        if let Some(max) = self.max_order_size {
            ensure!(
                ext_products.len() <= max,
                "order {} has {} products, more than the maximum of {max}",
                ext_order.order_id,
                ext_products.len()
            );
        }
        let products = ext_products
            .iter()
            .map(|ep| self.import_product(ep))
            .collect::<Result<Vec<Product>>>()
            .with_context(|| format!("invalid product in order {}", ext_order.order_id))?;

        Order::new(ext_order.order_id, products)
    }

    pub fn import_box_type(&self, ext_box_type: &ExtBoxType) -> Result<BoxType> {
        let dimension = self
            .import_dimension(&ext_box_type.dimensions)
            .with_context(|| format!("box type {:?}", ext_box_type.id))?;
        BoxType::new(ext_box_type.id.clone(), dimension)
    }

    pub fn import_catalog(&self, ext_box_types: &[ExtBoxType]) -> Result<Catalog> {
        let box_types = ext_box_types
            .iter()
            .map(|ebt| self.import_box_type(ebt))
            .collect::<Result<Vec<BoxType>>>()?;
        Catalog::new(box_types)
    }
}

/// Imports all orders of a request, in the order they appear.
/// If several orders are invalid, the error of the first one in the request is returned.
pub fn import(importer: &Importer, ext_request: &ExtPackRequest) -> Result<Vec<Order>> {
    let imported: Vec<Result<Order>> = ext_request
        .orders
        .par_iter()
        .map(|ext_order| importer.import_order(ext_order))
        .collect();
    imported.into_iter().collect()
}
