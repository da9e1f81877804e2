use serde::{Deserialize, Serialize};

use crate::util::duration::ConfigDuration;

/// raw shape of the `cluster.singleton` config section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingletonConfig {
    #[serde(rename = "singleton-name")]
    pub singleton_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "hand-over-retry-interval")]
    pub hand_over_retry_interval: ConfigDuration,
}
