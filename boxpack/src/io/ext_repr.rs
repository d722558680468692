use serde::{Deserialize, Serialize};

use crate::geometry::Dimension;

/// External representation of a [`Dimension`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtDimensions {
    pub height: u32,
    pub width: u32,
    pub length: u32,
}

/// External representation of a [`Product`](crate::entities::Product).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProduct {
    /// Unique identifier of the product within its order
    pub product_id: String,
    pub dimensions: ExtDimensions,
}

/// External representation of an [`Order`](crate::entities::Order).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrder {
    pub order_id: u64,
    /// Products of the order. A missing or `null` list is rejected on import, an empty list is valid.
    #[serde(default)]
    pub products: Option<Vec<ExtProduct>>,
}

/// External representation of a [`BoxType`](crate::entities::BoxType).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBoxType {
    pub id: String,
    pub dimensions: ExtDimensions,
}

/// External representation of a [`BoxInstance`](crate::entities::BoxInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBox {
    /// Id of the box type, `null` for an overflow box
    pub box_id: Option<String>,
    /// Ids of the products in the box, in the order they were placed
    pub products: Vec<String>,
    /// Remark about the box, only set for overflow boxes
    pub note: Option<String>,
}

/// External representation of a [`PackedOrder`](crate::entities::PackedOrder).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtOrderResult {
    pub order_id: u64,
    pub boxes: Vec<ExtBox>,
}

/// Document holding the orders to be packed
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackRequest {
    pub orders: Vec<ExtOrder>,
}

/// Document holding the packing of every order of an [`ExtPackRequest`], in the same order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPackResponse {
    pub orders: Vec<ExtOrderResult>,
}

impl From<Dimension> for ExtDimensions {
    fn from(d: Dimension) -> Self {
        ExtDimensions {
            height: d.height,
            width: d.width,
            length: d.length,
        }
    }
}
