use crate::config::DBFConfig;
use serde::{Deserialize, Serialize};
use sheetpack::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct DBFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: DBFConfig,
}
