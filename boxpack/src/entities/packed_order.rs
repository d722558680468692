use crate::entities::BoxInstance;

/// Outcome of packing an [`Order`](crate::entities::Order): the boxes in the order they were opened.
#[derive(Clone, Debug)]
pub struct PackedOrder {
    pub order_id: u64,
    pub boxes: Vec<BoxInstance>,
}

impl PackedOrder {
    pub fn n_boxes(&self) -> usize {
        self.boxes.len()
    }

    pub fn overflow_boxes(&self) -> impl Iterator<Item = &BoxInstance> {
        self.boxes.iter().filter(|b| b.is_overflow())
    }

    pub fn n_overflow_boxes(&self) -> usize {
        self.overflow_boxes().count()
    }

    pub fn n_products(&self) -> usize {
        self.boxes.iter().map(|b| b.products.len()).sum()
    }

    /// Total volume of all products, overflow boxes included
    pub fn product_volume(&self) -> u64 {
        self.boxes.iter().map(|b| b.product_volume()).sum()
    }

    /// Fraction of the volume of the catalog boxes used taken by products.
    /// Overflow boxes have no volume and are left out, 0.0 if no catalog box was used.
    pub fn usage(&self) -> f32 {
        let (product_volume, box_volume) = self
            .boxes
            .iter()
            .filter_map(|b| b.box_type.as_ref().map(|bt| (b.product_volume(), bt.volume())))
            .fold((0u64, 0u64), |(pv, bv), (p, b)| (pv + p, bv + b));
        match box_volume {
            0 => 0.0,
            _ => product_volume as f32 / box_volume as f32,
        }
    }
}
