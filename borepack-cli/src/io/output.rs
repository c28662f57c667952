use borepack::io::ext_repr::{ExtBoreInstance, ExtPackingResult};
use serde::{Deserialize, Serialize};

use crate::config::BoreCliConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct BoreOutput {
    #[serde(flatten)]
    pub instance: ExtBoreInstance,
    pub result: ExtPackingResult,
    pub config: BoreCliConfig,
}
