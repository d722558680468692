use itertools::Itertools;

use crate::entities::{BoxInstance, Catalog, PackedOrder};
use crate::io::ext_repr::{ExtBox, ExtBoxType, ExtOrderResult, ExtPackResponse};

/// Exports the packings of a set of orders out of the library
pub fn export(packed_orders: &[PackedOrder]) -> ExtPackResponse {
    ExtPackResponse {
        orders: packed_orders.iter().map(export_packed_order).collect(),
    }
}

pub fn export_packed_order(packed: &PackedOrder) -> ExtOrderResult {
    ExtOrderResult {
        order_id: packed.order_id,
        boxes: packed.boxes.iter().map(export_box).collect(),
    }
}

pub fn export_box(b: &BoxInstance) -> ExtBox {
    ExtBox {
        box_id: b.id().map(String::from),
        products: b.product_ids().map(String::from).collect_vec(),
        note: b.note().map(String::from),
    }
}

pub fn export_catalog(catalog: &Catalog) -> Vec<ExtBoxType> {
    catalog
        .box_types()
        .map(|bt| ExtBoxType {
            id: bt.id.clone(),
            dimensions: bt.dimension.into(),
        })
        .collect()
}
