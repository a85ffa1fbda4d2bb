use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::correction::CorrectionConfig;

pub mod corpus;
pub mod correction;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub correction: CorrectionConfig,
}

impl Config {
    /// Defaults overridden by `QUILL_*` environment variables
    pub fn new() -> Self {
        Config {
            corpus: CorpusConfig::new(),
            correction: CorrectionConfig::new(),
        }
    }
}
