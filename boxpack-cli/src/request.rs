use std::time::Instant;

use anyhow::{Context, Result};
use boxpack::entities::PackedOrder;
use boxpack::io::ext_repr::{ExtPackRequest, ExtPackResponse};
use boxpack::io::import::Importer;
use boxpack::io::{export, import};
use boxpack::packing::Packer;
use log::info;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::PackerConfig;

/// Imports all orders of `ext_request`, packs them independently of each other and exports the result.
/// Fails without packing anything if the catalog or any of the orders is invalid.
pub fn pack_request(ext_request: &ExtPackRequest, config: &PackerConfig) -> Result<ExtPackResponse> {
    let importer = Importer::new(config.max_order_size);
    let catalog = importer
        .import_catalog(&config.catalog)
        .context("invalid catalog in config")?;
    let orders = import::import(&importer, ext_request).context("invalid pack request")?;

    let packer = Packer::new(catalog, config.fit_test);

    let start = Instant::now();
    let packed_orders: Vec<PackedOrder> = orders.par_iter().map(|o| packer.pack(o)).collect();

    info!(
        "[MAIN] packed {} order(s) with {} product(s) into {} box(es) ({} overflow) in {:.3}ms",
        packed_orders.len(),
        packed_orders
            .iter()
            .map(|p| p.n_products())
            .sum::<usize>()
            .separate_with_commas(),
        packed_orders.iter().map(|p| p.n_boxes()).sum::<usize>(),
        packed_orders
            .iter()
            .map(|p| p.n_overflow_boxes())
            .sum::<usize>(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(export::export(&packed_orders))
}
