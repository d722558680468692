use boxpack::io::ext_repr::{ExtPackRequest, ExtPackResponse};
use serde::{Deserialize, Serialize};

use crate::config::PackerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    pub request: ExtPackRequest,
    pub response: ExtPackResponse,
    pub config: PackerConfig,
}
