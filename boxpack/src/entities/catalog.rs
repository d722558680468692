use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::BoxType;
use crate::geometry::Dimension;

/// The box types of the standard catalog, in priority order: id, (height, width, length)
pub const STANDARD_BOX_TYPES: [(&str, [u32; 3]); 3] = [
    ("Box 1", [30, 40, 80]),
    ("Box 2", [80, 50, 40]),
    ("Box 3", [50, 80, 60]),
];

/// Ordered set of box types available to pack orders.
/// Box types are consulted in the order they appear in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    box_types: Vec<BoxType>,
}

impl Catalog {
    pub fn new(box_types: Vec<BoxType>) -> Result<Self> {
        ensure!(!box_types.is_empty(), "catalog must contain at least one box type");
        ensure!(
            box_types.iter().map(|bt| &bt.id).all_unique(),
            "box type ids must be unique, duplicates: {:?}",
            box_types.iter().map(|bt| &bt.id).duplicates().collect_vec()
        );
        Ok(Catalog { box_types })
    }

    /// The standard catalog: [`STANDARD_BOX_TYPES`]
    pub fn standard() -> Self {
        let box_types = STANDARD_BOX_TYPES
            .iter()
            .map(|(id, [height, width, length])| BoxType {
                id: id.to_string(),
                dimension: Dimension {
                    height: *height,
                    width: *width,
                    length: *length,
                },
            })
            .collect_vec();
        Catalog { box_types }
    }

    pub fn box_types(&self) -> impl Iterator<Item = &BoxType> {
        self.box_types.iter()
    }

    pub fn box_type(&self, id: &str) -> Option<&BoxType> {
        self.box_types.iter().find(|bt| bt.id == id)
    }

    pub fn len(&self) -> usize {
        self.box_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.box_types.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}
