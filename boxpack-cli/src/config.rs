use serde::{Deserialize, Serialize};

use boxpack::entities::Catalog;
use boxpack::geometry::FitTest;
use boxpack::io::export::export_catalog;
use boxpack::io::ext_repr::ExtBoxType;

/// Configuration of the packer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PackerConfig {
    /// Box types available to pack orders, in order of priority. Defaults to the standard catalog
    #[serde(default = "standard_catalog")]
    pub catalog: Vec<ExtBoxType>,
    /// Test deciding whether a group of products fits inside a box
    #[serde(default)]
    pub fit_test: FitTest,
    /// Orders with more products than this are rejected. If undefined, orders of any size are packed
    #[serde(default)]
    pub max_order_size: Option<usize>,
}

fn standard_catalog() -> Vec<ExtBoxType> {
    export_catalog(&Catalog::standard())
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            catalog: standard_catalog(),
            fit_test: FitTest::Exact,
            max_order_size: None,
        }
    }
}
