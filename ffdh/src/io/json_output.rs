use serde::{Deserialize, Serialize};
use shelfpack::io::ext_repr::{ExtCutInstance, ExtSolution};

use crate::config::FFDHConfig;

/// Everything written to the solution file: the instance as the packer saw it
/// (internal units), the solution and the config that produced it.
#[derive(Serialize, Deserialize, Clone)]
pub struct JsonOutput {
    #[serde(flatten)]
    pub instance: ExtCutInstance,
    pub solution: ExtSolution,
    pub config: FFDHConfig,
}
